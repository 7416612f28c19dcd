//! Forge-style version range parsing and classification.
//!
//! A range expression is a `||`-separated union of alternatives; each
//! alternative is either a hyphen range (`1.0.0 - 2.x`) or a
//! whitespace-separated list of comparators that are intersected
//! (`>= 1.0.0 < 2.0.0`). Versions may be partial (`1`, `1.2`, `1.x`) and
//! are widened to the interval they denote. Full versions are parsed and
//! ordered by the `semver` crate.
//!
//! The only question the linter asks is [`VersionRange::is_open_ended`]:
//! does any alternative accept every future version?

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;
use thiserror::Error;

static HYPHEN_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+-\s+(\S+)$").expect("hyphen range regex is valid")
});

static COMPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(>=|<=|~>|>|<|=|~|\^)?\s*([^\s<>=~^|]+)")
        .expect("comparator regex is valid")
});

static PARTIAL_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d+|[xX*])(?:\.(\d+|[xX*]))?(?:\.(\d+|[xX*]))?(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?$",
    )
    .expect("partial version regex is valid")
});

/// Failure to parse a range expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Unparsable version range: {0:?}")]
    Unparsable(String),

    #[error("Invalid version {version:?} in range {range:?}: {reason}")]
    InvalidVersion {
        range: String,
        version: String,
        reason: String,
    },
}

/// A lower bound, or a concrete upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound {
    pub version: Version,
    pub inclusive: bool,
}

impl Bound {
    #[must_use]
    pub const fn inclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: true,
        }
    }

    #[must_use]
    pub const fn exclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: false,
        }
    }
}

/// The upper end of an interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpperBound {
    Bounded(Bound),
    /// No upper limit: every later version matches.
    Unbounded,
}

/// A contiguous set of versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub lower: Bound,
    pub upper: UpperBound,
}

impl Interval {
    /// Every version.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            lower: Bound::inclusive(Version::new(0, 0, 0)),
            upper: UpperBound::Unbounded,
        }
    }

    fn at_least(lower: Bound) -> Self {
        Self {
            lower,
            upper: UpperBound::Unbounded,
        }
    }

    fn between(lower: Bound, upper: Bound) -> Option<Self> {
        Self {
            lower,
            upper: UpperBound::Bounded(upper),
        }
        .non_empty()
    }

    fn below(upper: Bound) -> Option<Self> {
        Self::between(Bound::inclusive(Version::new(0, 0, 0)), upper)
    }

    fn non_empty(self) -> Option<Self> {
        match &self.upper {
            UpperBound::Unbounded => Some(self),
            UpperBound::Bounded(upper) => match self.lower.version.cmp(&upper.version) {
                Ordering::Less => Some(self),
                Ordering::Equal if self.lower.inclusive && upper.inclusive => Some(self),
                _ => None,
            },
        }
    }

    /// Intersection of two intervals, or `None` if they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let lower = match self.lower.version.cmp(&other.lower.version) {
            Ordering::Greater => self.lower.clone(),
            Ordering::Less => other.lower.clone(),
            Ordering::Equal => Bound {
                version: self.lower.version.clone(),
                inclusive: self.lower.inclusive && other.lower.inclusive,
            },
        };

        let upper = match (&self.upper, &other.upper) {
            (UpperBound::Unbounded, upper) | (upper, UpperBound::Unbounded) => upper.clone(),
            (UpperBound::Bounded(a), UpperBound::Bounded(b)) => {
                UpperBound::Bounded(match a.version.cmp(&b.version) {
                    Ordering::Less => a.clone(),
                    Ordering::Greater => b.clone(),
                    Ordering::Equal => Bound {
                        version: a.version.clone(),
                        inclusive: a.inclusive && b.inclusive,
                    },
                })
            }
        };

        Self { lower, upper }.non_empty()
    }

    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        let above_lower = match version.cmp(&self.lower.version) {
            Ordering::Greater => true,
            Ordering::Equal => self.lower.inclusive,
            Ordering::Less => false,
        };
        let below_upper = match &self.upper {
            UpperBound::Unbounded => true,
            UpperBound::Bounded(upper) => match version.cmp(&upper.version) {
                Ordering::Less => true,
                Ordering::Equal => upper.inclusive,
                Ordering::Greater => false,
            },
        };
        above_lower && below_upper
    }

    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        matches!(self.upper, UpperBound::Unbounded)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from_zero = self.lower.inclusive && self.lower.version == Version::new(0, 0, 0);
        match &self.upper {
            UpperBound::Unbounded if from_zero => write!(f, "*"),
            UpperBound::Bounded(upper)
                if upper.inclusive && self.lower.inclusive && upper.version == self.lower.version =>
            {
                write!(f, "{}", upper.version)
            }
            upper => {
                let mut parts = Vec::new();
                if !from_zero {
                    let op = if self.lower.inclusive { ">=" } else { ">" };
                    parts.push(format!("{op} {}", self.lower.version));
                }
                if let UpperBound::Bounded(upper) = upper {
                    let op = if upper.inclusive { "<=" } else { "<" };
                    parts.push(format!("{op} {}", upper.version));
                }
                write!(f, "{}", parts.join(" "))
            }
        }
    }
}

/// A parsed range expression: a union of intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    intervals: Vec<Interval>,
}

impl VersionRange {
    /// Parse a range expression. An empty expression matches every version.
    pub fn parse(expr: &str) -> Result<Self, RangeError> {
        if expr.trim().is_empty() {
            return Ok(Self::any());
        }

        let mut intervals = Vec::new();
        for alternative in expr.split("||") {
            if alternative.trim().is_empty() {
                return Err(RangeError::Unparsable(expr.to_string()));
            }
            if let Some(interval) = parse_alternative(alternative.trim(), expr)? {
                intervals.push(interval);
            }
        }

        let range = Self { intervals };
        tracing::trace!(expr, parsed = %range, "parsed version range");
        Ok(range)
    }

    #[must_use]
    pub fn any() -> Self {
        Self {
            intervals: vec![Interval::any()],
        }
    }

    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// True when no version satisfies the range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// True when some alternative has no upper limit.
    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.intervals.iter().any(Interval::is_open_ended)
    }

    #[must_use]
    pub fn contains(&self, version: &Version) -> bool {
        self.intervals.iter().any(|interval| interval.contains(version))
    }
}

impl FromStr for VersionRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return write!(f, "<empty>");
        }
        let rendered: Vec<String> = self.intervals.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(" || "))
    }
}

/// Parse `expr` and report whether it is open-ended.
pub fn is_open_ended(expr: &str) -> Result<bool, RangeError> {
    VersionRange::parse(expr).map(|range| range.is_open_ended())
}

fn parse_alternative(alternative: &str, expr: &str) -> Result<Option<Interval>, RangeError> {
    if let Some(caps) = HYPHEN_RANGE.captures(alternative) {
        let from = Partial::parse(&caps[1], expr)?;
        let to = Partial::parse(&caps[2], expr)?;
        return hyphen(&from, &to, expr);
    }

    let mut current = Some(Interval::any());
    let mut rest = alternative;
    while !rest.trim().is_empty() {
        let caps = COMPARATOR
            .captures(rest)
            .ok_or_else(|| RangeError::Unparsable(expr.to_string()))?;
        let op = caps.get(1).map_or("", |m| m.as_str());
        let partial = Partial::parse(&caps[2], expr)?;
        let next = comparator(op, &partial, expr)?;

        current = match (current, next) {
            (Some(acc), Some(next)) => acc.intersect(&next),
            _ => None,
        };
        rest = &rest[caps.get(0).map_or(rest.len(), |m| m.end())..];
    }
    Ok(current)
}

fn hyphen(from: &Partial, to: &Partial, expr: &str) -> Result<Option<Interval>, RangeError> {
    let lower = from
        .floor()
        .map_or_else(|| Bound::inclusive(Version::new(0, 0, 0)), Bound::inclusive);
    Ok(match to {
        Partial::Any => Some(Interval::at_least(lower)),
        Partial::Full(version) => Interval::between(lower, Bound::inclusive(version.clone())),
        _ => Interval::between(lower, Bound::exclusive(to.successor(expr)?)),
    })
}

fn comparator(op: &str, partial: &Partial, expr: &str) -> Result<Option<Interval>, RangeError> {
    let Some(floor) = partial.floor() else {
        // Wildcard major: `*`, `>= x`, `<= *` match everything, `< x` and `> x` nothing.
        return Ok(match op {
            "<" | ">" => None,
            _ => Some(Interval::any()),
        });
    };

    let interval = match (op, partial) {
        ("" | "=", Partial::Full(version)) => {
            Interval::between(Bound::inclusive(version.clone()), Bound::inclusive(version.clone()))
        }
        ("" | "=" | "~" | "~>", _) => {
            Interval::between(Bound::inclusive(floor), Bound::exclusive(partial.tilde_ceiling(expr)?))
        }
        ("^", _) => {
            let ceiling = bump_major(&floor, expr)?;
            Interval::between(Bound::inclusive(floor), Bound::exclusive(ceiling))
        }
        (">=", _) => Some(Interval::at_least(Bound::inclusive(floor))),
        (">", Partial::Full(version)) => Some(Interval::at_least(Bound::exclusive(version.clone()))),
        (">", _) => Some(Interval::at_least(Bound::inclusive(partial.successor(expr)?))),
        ("<", _) => Interval::below(Bound::exclusive(floor)),
        ("<=", Partial::Full(version)) => Interval::below(Bound::inclusive(version.clone())),
        ("<=", _) => Interval::below(Bound::exclusive(partial.successor(expr)?)),
        _ => return Err(RangeError::Unparsable(expr.to_string())),
    };
    Ok(interval)
}

fn bump_major(version: &Version, expr: &str) -> Result<Version, RangeError> {
    version
        .major
        .checked_add(1)
        .map(|major| Version::new(major, 0, 0))
        .ok_or_else(|| RangeError::Unparsable(expr.to_string()))
}

fn bump_minor(version: &Version, expr: &str) -> Result<Version, RangeError> {
    version
        .minor
        .checked_add(1)
        .map(|minor| Version::new(version.major, minor, 0))
        .ok_or_else(|| RangeError::Unparsable(expr.to_string()))
}

/// A possibly-incomplete version as written in a range.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Partial {
    Any,
    Major(u64),
    Minor(u64, u64),
    Full(Version),
}

impl Partial {
    fn parse(text: &str, expr: &str) -> Result<Self, RangeError> {
        let caps = PARTIAL_VERSION
            .captures(text)
            .ok_or_else(|| RangeError::Unparsable(expr.to_string()))?;

        let invalid = |reason: String| RangeError::InvalidVersion {
            range: expr.to_string(),
            version: text.to_string(),
            reason,
        };

        let mut numbers = Vec::with_capacity(3);
        let mut wildcard_seen = false;
        for component in [caps.get(1), caps.get(2), caps.get(3)] {
            match component.map(|m| m.as_str()) {
                None | Some("x" | "X" | "*") => wildcard_seen = true,
                Some(digits) if !wildcard_seen => {
                    let value = digits
                        .parse::<u64>()
                        .map_err(|err| invalid(err.to_string()))?;
                    numbers.push(value);
                }
                Some(_) => return Err(invalid("numeric component after wildcard".into())),
            }
        }

        let has_suffix = caps.get(4).is_some() || caps.get(5).is_some();
        match numbers.as_slice() {
            [_, _, _] => Version::parse(text)
                .map(Self::Full)
                .map_err(|err| invalid(err.to_string())),
            _ if has_suffix => Err(invalid(
                "pre-release and build tags need a full major.minor.patch version".into(),
            )),
            [major, minor] => Ok(Self::Minor(*major, *minor)),
            [major] => Ok(Self::Major(*major)),
            _ => Ok(Self::Any),
        }
    }

    /// Lowest version the partial denotes; `None` for a bare wildcard.
    fn floor(&self) -> Option<Version> {
        match self {
            Self::Any => None,
            Self::Major(major) => Some(Version::new(*major, 0, 0)),
            Self::Minor(major, minor) => Some(Version::new(*major, *minor, 0)),
            Self::Full(version) => Some(version.clone()),
        }
    }

    /// First version past everything the partial denotes.
    fn successor(&self, expr: &str) -> Result<Version, RangeError> {
        match self {
            Self::Major(major) => bump_major(&Version::new(*major, 0, 0), expr),
            Self::Minor(major, minor) => bump_minor(&Version::new(*major, *minor, 0), expr),
            Self::Full(version) => Ok(version.clone()),
            Self::Any => Err(RangeError::Unparsable(expr.to_string())),
        }
    }

    /// Exclusive ceiling for `~`: next minor when a minor was given, else next major.
    fn tilde_ceiling(&self, expr: &str) -> Result<Version, RangeError> {
        match self {
            Self::Major(major) => bump_major(&Version::new(*major, 0, 0), expr),
            Self::Minor(major, minor) => bump_minor(&Version::new(*major, *minor, 0), expr),
            Self::Full(version) => bump_minor(version, expr),
            Self::Any => Err(RangeError::Unparsable(expr.to_string())),
        }
    }
}
