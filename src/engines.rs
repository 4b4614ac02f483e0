use crate::config::Release;
use crate::rules::{Condition, Context};
use crate::version::{bound, is_unknown, UNKNOWN_VERSION};
use Condition::{AllOf, Always, Has, Lacks};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Ceiling {
    Open,
    At(f64),
    /// Newest release known for a brand, taken from the detector configuration.
    Latest(Release),
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Outcome {
    Bounded { floor: f64, ceiling: Ceiling },
    Unknown,
}

/// One capability milestone: if `when` holds, the browser is at least `floor`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rung {
    pub when: Condition,
    pub outcome: Outcome,
}

const fn from(when: Condition, floor: f64) -> Rung {
    Rung {
        when,
        outcome: Outcome::Bounded {
            floor,
            ceiling: Ceiling::Open,
        },
    }
}

const fn between(when: Condition, floor: f64, ceiling: f64) -> Rung {
    Rung {
        when,
        outcome: Outcome::Bounded {
            floor,
            ceiling: Ceiling::At(ceiling),
        },
    }
}

const fn up_to_latest(when: Condition, floor: f64, release: Release) -> Rung {
    Rung {
        when,
        outcome: Outcome::Bounded {
            floor,
            ceiling: Ceiling::Latest(release),
        },
    }
}

/// Capability milestones of one engine family, newest first. Capabilities
/// accumulate across releases, so the first rung that holds is the newest
/// milestone the environment has reached. The last rung is always `Always`.
pub(crate) struct Ladder {
    pub family: &'static str,
    pub rungs: &'static [Rung],
}

impl Ladder {
    pub fn resolve(&self, ctx: &Context<'_>, reported: f64) -> f64 {
        let Some((idx, rung)) = self
            .rungs
            .iter()
            .enumerate()
            .find(|(_, rung)| rung.when.holds(ctx))
        else {
            return UNKNOWN_VERSION;
        };
        tracing::trace!(family = self.family, rung = idx, reported, "milestone matched");
        match rung.outcome {
            Outcome::Unknown => UNKNOWN_VERSION,
            Outcome::Bounded { floor, ceiling } => {
                let ceiling = match ceiling {
                    Ceiling::Open => f64::INFINITY,
                    Ceiling::At(c) => c,
                    Ceiling::Latest(release) => ctx.latest.of(release),
                };
                bound(reported, floor, ceiling)
            }
        }
    }
}

pub(crate) const TRIDENT: Ladder = Ladder {
    family: "trident",
    rungs: &[
        up_to_latest(Has("document.pointerLockElement"), 13.0, Release::Edge),
        from(Has("Proxy"), 12.0),
        from(Has("MutationObserver"), 11.0),
        from(Has("atob"), 10.0),
        from(Has("addEventListener"), 9.0),
        from(Has("localStorage"), 8.0),
        from(
            AllOf(&[
                Has("document.all"),
                Has("XMLHttpRequest"),
                Lacks("XDomainRequest"),
                Lacks("opera"),
            ]),
            7.0,
        ),
        from(AllOf(&[Has("document.all"), Lacks("XMLHttpRequest")]), 6.0),
        Rung {
            when: Always,
            outcome: Outcome::Unknown,
        },
    ],
};

pub(crate) const GECKO: Ladder = Ladder {
    family: "gecko",
    rungs: &[
        up_to_latest(Has("PushManager"), 44.0, Release::Firefox),
        between(Has("MessageChannel"), 41.0, 43.0),
        between(Has("fetch"), 39.0, 40.0),
        from(Has("performance.mark"), 38.0),
        between(Has("crypto.subtle"), 34.0, 37.0),
        between(Has("navigator.sendBeacon"), 31.0, 33.0),
        between(Has("SharedWorker"), 29.0, 30.0),
        between(Has("AudioContext"), 25.0, 28.0),
        between(Has("requestAnimationFrame"), 23.0, 24.0),
        from(Has("Notification"), 22.0),
        between(Has("document.hidden"), 18.0, 21.0),
        from(Has("navigator.mozGetUserMedia"), 17.0),
        from(Has("indexedDB"), 16.0),
        from(Has("performance.now"), 15.0),
        from(Has("MutationObserver"), 14.0),
        from(Has("Blob"), 13.0),
        between(Has("WebSocket"), 11.0, 12.0),
        from(Has("navigator.mozBattery"), 10.0),
        between(Has("performance.timing"), 7.0, 9.0),
        from(Has("matchMedia"), 6.0),
        between(Has("Uint32Array"), 4.0, 5.0),
        from(Has("FileReader"), 3.6),
        from(Has("JSON"), 3.5),
        from(Has("postMessage"), 3.0),
        between(Always, 0.0, 2.9),
    ],
};

pub(crate) const CHROMIUM: Ladder = Ladder {
    family: "chromium",
    rungs: &[
        up_to_latest(Has("Proxy"), 49.0, Release::Chrome),
        between(Has("PushManager"), 44.0, 48.0),
        from(Has("navigator.permissions"), 43.0),
        between(Has("navigator.sendBeacon"), 39.0, 42.0),
        from(Has("navigator.getBattery"), 38.0),
        from(Has("crypto.subtle"), 37.0),
        between(Has("HTMLImageElement.srcset"), 34.0, 36.0),
        from(Has("document.visibilityState"), 33.0),
        from(Has("Promise"), 32.0),
        between(Has("navigator.vibrate"), 30.0, 31.0),
        between(Has("MutationObserver"), 27.0, 29.0),
        from(Has("HTMLTemplateElement.content"), 26.0),
        from(Has("performance.mark"), 25.0),
        from(Has("requestAnimationFrame"), 24.0),
        from(Has("URL.createObjectURL"), 23.0),
        from(Has("Notification"), 22.0),
        from(Has("navigator.webkitGetUserMedia"), 21.0),
        from(Has("Blob"), 20.0),
        between(Has("document.webkitRequestFullscreen"), 15.0, 19.0),
        between(Has("performance.timing"), 13.0, 14.0),
        from(Has("HTMLDetailsElement.open"), 12.0),
        from(Has("webkitIndexedDB"), 11.0),
        from(Has("HTMLInputElement.checkValidity"), 10.0),
        from(Has("matchMedia"), 9.0),
        from(Has("HTMLElement.classList"), 8.0),
        from(Has("Uint32Array"), 7.0),
        from(Has("FileReader"), 6.0),
        from(Has("webkitNotification"), 5.0),
        from(Has("history.replaceState"), 4.0),
        between(Always, 0.0, 3.0),
    ],
};

pub(crate) const SAFARI: Ladder = Ladder {
    family: "safari",
    rungs: &[
        from(Has("CSS.supports"), 9.0),
        between(Has("indexedDB"), 8.0, 8.4),
        between(Has("document.execCommand"), 7.0, 7.1),
        between(Has("requestAnimationFrame"), 6.0, 6.1),
        from(Has("Uint32Array"), 5.1),
        from(Has("navigator.geolocation"), 5.0),
        between(Has("navigator.onLine"), 4.2, 4.3),
        between(Has("JSON"), 4.0, 4.1),
        from(Has("postMessage"), 3.2),
        between(Always, 0.0, 3.1),
    ],
};

pub(crate) const KINDLE: Ladder = Ladder {
    family: "kindle",
    rungs: &[
        from(Has("document.pointerLockElement"), 3.0),
        from(Has("PerformanceTiming"), 2.0),
        from(Always, 1.0),
    ],
};

/// Android has no reliable OS-version API, so OS and stock-browser versions
/// both come from this ladder.
pub(crate) const ANDROID: Ladder = Ladder {
    family: "android",
    rungs: &[
        from(Has("navigator.sendBeacon"), 5.0),
        from(Has("performance.now"), 4.4),
        between(Has("FileList"), 4.0, 4.3),
        between(Always, 2.1, 4.0),
    ],
};

/// Trident layout-engine version for an IE/Edge browser version.
pub(crate) fn trident_engine_version(browser_version: f64) -> f64 {
    if is_unknown(browser_version) {
        UNKNOWN_VERSION
    } else if browser_version >= 11.0 {
        7.0
    } else if browser_version == 10.0 {
        6.0
    } else if browser_version == 9.0 {
        5.0
    } else if browser_version == 8.0 {
        4.0
    } else if browser_version <= 7.0 {
        3.0
    } else {
        UNKNOWN_VERSION
    }
}

/// Opera moved to Chromium's release train at Opera 15 / Chromium 28; from
/// there on an Opera release trails its Chromium base by this many versions.
pub(crate) const OPERA_CHROMIUM_OFFSET: f64 = 13.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::SyntheticEnvironment;
    use crate::rules::test_support::context;

    fn resolve(ladder: &Ladder, globals: &[&str], reported: f64) -> f64 {
        let env = SyntheticEnvironment::new().with_all(globals.iter().copied());
        ladder.resolve(&context(&env, ""), reported)
    }

    /// Every probe path a ladder references, oldest rung first.
    fn paths_oldest_first(ladder: &Ladder) -> Vec<&'static str> {
        fn collect(c: &Condition, out: &mut Vec<&'static str>) {
            match c {
                Has(p) => out.push(*p),
                AllOf(all) => all.iter().for_each(|c| collect(c, out)),
                _ => {}
            }
        }
        let mut out = Vec::new();
        for rung in ladder.rungs.iter().rev() {
            collect(&rung.when, &mut out);
        }
        out
    }

    #[test]
    fn chromium_newest_milestone() {
        assert_eq!(resolve(&CHROMIUM, &["Proxy", "PushManager"], 53.0), 53.0);
        assert_eq!(resolve(&CHROMIUM, &["Proxy"], 70.0), 55.0);
        assert_eq!(resolve(&CHROMIUM, &["Proxy"], UNKNOWN_VERSION), 49.0);
        assert_eq!(resolve(&CHROMIUM, &["PushManager"], 55.0), 48.0);
        assert_eq!(resolve(&CHROMIUM, &[], 2.0), 2.0);
        assert_eq!(resolve(&CHROMIUM, &[], UNKNOWN_VERSION), 0.0);
    }

    #[test]
    fn gecko_ladder() {
        assert_eq!(resolve(&GECKO, &["PushManager"], 51.0), 51.0);
        assert_eq!(resolve(&GECKO, &["fetch", "MessageChannel"], 42.0), 42.0);
        assert_eq!(resolve(&GECKO, &["FileReader"], 3.0), 3.6);
        assert_eq!(resolve(&GECKO, &[], 10.0), 2.9);
    }

    #[test]
    fn trident_ladder() {
        assert_eq!(resolve(&TRIDENT, &["document.pointerLockElement"], 14.0), 14.0);
        assert_eq!(resolve(&TRIDENT, &["MutationObserver"], 11.0), 11.0);
        assert_eq!(
            resolve(&TRIDENT, &["document.all", "XMLHttpRequest"], UNKNOWN_VERSION),
            7.0
        );
        assert_eq!(
            resolve(
                &TRIDENT,
                &["document.all", "XMLHttpRequest", "XDomainRequest"],
                UNKNOWN_VERSION
            ),
            UNKNOWN_VERSION
        );
        assert_eq!(resolve(&TRIDENT, &["document.all"], 5.0), 6.0);
        assert_eq!(resolve(&TRIDENT, &[], 5.0), UNKNOWN_VERSION);
    }

    #[test]
    fn safari_and_small_ladders() {
        assert_eq!(resolve(&SAFARI, &["CSS.supports"], 10.1), 10.1);
        assert_eq!(resolve(&SAFARI, &["document.execCommand"], 7.0), 7.0);
        assert_eq!(resolve(&SAFARI, &["document.execCommand"], 9.0), 7.1);
        assert_eq!(resolve(&KINDLE, &["PerformanceTiming"], 1.0), 2.0);
        assert_eq!(resolve(&KINDLE, &[], UNKNOWN_VERSION), 1.0);
        assert_eq!(resolve(&ANDROID, &["navigator.sendBeacon"], 6.0), 6.0);
        assert_eq!(resolve(&ANDROID, &["FileList"], 4.4), 4.3);
        assert_eq!(resolve(&ANDROID, &[], UNKNOWN_VERSION), 2.1);
    }

    #[test]
    fn configured_latest_is_the_ceiling() {
        use crate::config::LatestReleases;
        use crate::probe::Probe;
        let env = SyntheticEnvironment::new().with("Proxy");
        let latest = LatestReleases {
            chrome: 120.0,
            ..Default::default()
        };
        let ctx = Context {
            probe: Probe::new(&env),
            ua: "",
            patterns: crate::rules::test_support::patterns(),
            latest: &latest,
        };
        assert_eq!(CHROMIUM.resolve(&ctx, 100.0), 100.0);
    }

    /// Growing the capability set oldest-to-newest never lowers the version
    /// when the UA itself does not overstate it.
    #[test]
    fn monotonic_in_capabilities() {
        for ladder in [&TRIDENT, &CHROMIUM, &GECKO, &SAFARI, &KINDLE, &ANDROID] {
            let paths = paths_oldest_first(ladder);
            for reported in [UNKNOWN_VERSION, 0.0] {
                let mut previous = f64::NEG_INFINITY;
                for n in 0..=paths.len() {
                    let v = resolve(ladder, &paths[..n], reported);
                    assert!(
                        v >= previous,
                        "{} regressed from {} to {} at {} capabilities (reported {})",
                        ladder.family,
                        previous,
                        v,
                        n,
                        reported
                    );
                    previous = v;
                }
            }
        }
    }

    #[test]
    fn trident_monotonic_across_excluding_features() {
        let history = [
            "document.all",
            "XMLHttpRequest",
            "localStorage",
            "XDomainRequest",
            "addEventListener",
            "atob",
            "MutationObserver",
            "Proxy",
            "document.pointerLockElement",
        ];
        let expected = [UNKNOWN_VERSION, 6.0, 7.0, 8.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(resolve(&TRIDENT, &history[..n], UNKNOWN_VERSION), *want, "{:?}", &history[..n]);
        }
    }

    #[test]
    fn trident_engine_mapping() {
        assert_eq!(trident_engine_version(14.0), 7.0);
        assert_eq!(trident_engine_version(11.0), 7.0);
        assert_eq!(trident_engine_version(10.0), 6.0);
        assert_eq!(trident_engine_version(9.0), 5.0);
        assert_eq!(trident_engine_version(8.0), 4.0);
        assert_eq!(trident_engine_version(6.0), 3.0);
        assert_eq!(trident_engine_version(UNKNOWN_VERSION), UNKNOWN_VERSION);
    }
}
