use crate::config::LatestReleases;
use crate::helpers::looks_like;
use crate::patterns::UaPatterns;
use crate::probe::Probe;
use fancy_regex::Regex;

/// Everything one classification reads: the environment, the UA string and
/// the compiled patterns. Borrowed for the duration of a single `detect`.
#[derive(Clone, Copy)]
pub(crate) struct Context<'a> {
    pub probe: Probe<'a>,
    pub ua: &'a str,
    pub patterns: &'a UaPatterns,
    pub latest: &'a LatestReleases,
}

impl<'a> Context<'a> {
    pub fn looks_like(&self, re: &Regex) -> bool {
        looks_like(re, self.ua)
    }

    /// `navigator.platform`, empty when unavailable.
    pub fn platform(&self) -> &'a str {
        self.probe.text("navigator.platform").unwrap_or("")
    }
}

/// User-agent tokens a rule may test for.
#[derive(Debug, Clone, Copy)]
pub(crate) enum UaToken {
    Win,
    Touch,
    IeMobile,
    Kindle,
    Opr,
}

impl UaToken {
    fn found(self, ctx: &Context<'_>) -> bool {
        let p = ctx.patterns;
        match self {
            Self::Win => ctx.looks_like(&p.win),
            Self::Touch => ctx.looks_like(&p.touch),
            Self::IeMobile => ctx.looks_like(&p.iemobile),
            Self::Kindle => p.is_kindle(ctx.ua),
            Self::Opr => ctx.looks_like(&p.opr),
        }
    }
}

/// Predicate of one rule in a priority-ordered rule table.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Condition {
    Always,
    Has(&'static str),
    Lacks(&'static str),
    Ua(UaToken),
    NotUa(UaToken),
    MathMl,
    AllOf(&'static [Condition]),
    AnyOf(&'static [Condition]),
}

impl Condition {
    pub fn holds(&self, ctx: &Context<'_>) -> bool {
        match *self {
            Self::Always => true,
            Self::Has(path) => ctx.probe.has(path),
            Self::Lacks(path) => ctx.probe.lacks(path),
            Self::Ua(token) => token.found(ctx),
            Self::NotUa(token) => !token.found(ctx),
            Self::MathMl => ctx.probe.env().renders_mathml(),
            Self::AllOf(all) => all.iter().all(|c| c.holds(ctx)),
            Self::AnyOf(any) => any.iter().any(|c| c.holds(ctx)),
        }
    }
}

/// First outcome whose condition holds, in table order.
pub(crate) fn first_match<T: Copy>(rules: &[(Condition, T)], ctx: &Context<'_>) -> Option<T> {
    rules
        .iter()
        .find(|(condition, _)| condition.holds(ctx))
        .map(|&(_, outcome)| outcome)
}
