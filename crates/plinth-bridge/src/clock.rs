// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixed catalog of known alarm-clock apps across device manufacturers.
//
// A static lookup table, probed in order with early exit on the first entry
// whose activity resolves. Plain records, no polymorphism, never mutated.

use plinth_core::types::{ClockAppCandidate, ComponentName};

/// Known clock apps on different manufacturers, in probe order.
pub const CLOCK_APPS: [ClockAppCandidate; 7] = [
    ClockAppCandidate {
        label: "HTC Alarm Clock",
        package: "com.htc.android.worldclock",
        component: "com.htc.android.worldclock.WorldClockTabControl",
    },
    ClockAppCandidate {
        label: "Standard Alarm Clock",
        package: "com.android.deskclock",
        component: "com.android.deskclock.AlarmClock",
    },
    ClockAppCandidate {
        label: "Froyo Nexus Alarm Clock",
        package: "com.google.android.deskclock",
        component: "com.android.deskclock.DeskClock",
    },
    ClockAppCandidate {
        label: "Moto Blur Alarm Clock",
        package: "com.motorola.blur.alarmclock",
        component: "com.motorola.blur.alarmclock.AlarmClock",
    },
    ClockAppCandidate {
        label: "Samsung Galaxy Clock",
        package: "com.sec.android.app.clockpackage",
        component: "com.sec.android.app.clockpackage.ClockPackage",
    },
    ClockAppCandidate {
        label: "Sony Xperia Z",
        package: "com.sonyericsson.organizer",
        component: "com.sonyericsson.organizer.Organizer_WorldClock",
    },
    ClockAppCandidate {
        label: "ASUS Tablets",
        package: "com.asus.deskclock",
        component: "com.asus.deskclock.DeskClock",
    },
];

/// Probe the catalog in order and return the first activity that resolves.
///
/// `probe` is asked once per candidate until it answers true; remaining
/// candidates are never probed.
pub fn resolve_clock_app(
    mut probe: impl FnMut(&ComponentName) -> bool,
) -> Option<ComponentName> {
    CLOCK_APPS
        .iter()
        .map(ClockAppCandidate::component_name)
        .find(|component| probe(component))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_fixed_entries() {
        assert_eq!(CLOCK_APPS.len(), 7);
        assert_eq!(CLOCK_APPS[1].package, "com.android.deskclock");
        // The Froyo Nexus entry launches the AOSP class from the Google package.
        assert_eq!(CLOCK_APPS[2].package, "com.google.android.deskclock");
        assert_eq!(CLOCK_APPS[2].component, "com.android.deskclock.DeskClock");
    }

    #[test]
    fn no_candidate_resolves_means_none() {
        let mut probed = 0;
        let found = resolve_clock_app(|_| {
            probed += 1;
            false
        });
        assert!(found.is_none());
        assert_eq!(probed, 7);
    }

    #[test]
    fn first_resolvable_candidate_wins() {
        // Only the Samsung entry (index 4) is installed.
        let found = resolve_clock_app(|cn| cn.package == "com.sec.android.app.clockpackage")
            .expect("candidate should resolve");
        assert_eq!(found.class_name, "com.sec.android.app.clockpackage.ClockPackage");
    }

    #[test]
    fn probing_stops_at_the_first_match() {
        let mut probed = Vec::new();
        let found = resolve_clock_app(|cn| {
            probed.push(cn.package.clone());
            cn.package == "com.android.deskclock"
        });
        assert_eq!(found.unwrap().package, "com.android.deskclock");
        // HTC probed first, then the match; nothing after.
        assert_eq!(
            probed,
            vec!["com.htc.android.worldclock", "com.android.deskclock"]
        );
    }
}
