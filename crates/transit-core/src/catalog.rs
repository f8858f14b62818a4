//! Static content shown across the site.
//!
//! Every "live" figure on the site comes from here. Nothing is fetched or
//! computed; the dashboard only re-renders its clock.

use crate::types::{AnimationDelay, CountFraction, FacilityState, Icon, Trend, UpdateSeverity};

/// A product feature, shown on the landing page (summary) and the features page (details)
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureItem {
    pub icon: Icon,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub delay: AnimationDelay,
}

/// Headline figure on the landing page status section
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightStat {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: Trend,
    pub delay: AnimationDelay,
}

/// One facility line inside a station snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityReading {
    pub name: &'static str,
    pub state: FacilityState,
    pub count: CountFraction,
}

/// Simulated operational state of a station
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub station: &'static str,
    pub summary: &'static str,
    pub facilities: Vec<FacilityReading>,
    pub trend: Trend,
    pub delay: AnimationDelay,
}

/// Entry in the dashboard's "Recent Updates" list
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEntry {
    pub time_label: &'static str,
    pub message: &'static str,
    pub severity: UpdateSeverity,
}

/// Numbered step on the "How it works" page
#[derive(Debug, Clone, PartialEq)]
pub struct HowItWorksStep {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub delay: AnimationDelay,
}

/// Closing call-out panel
#[derive(Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub delay: AnimationDelay,
}

pub fn features() -> Vec<FeatureItem> {
    vec![
        FeatureItem {
            icon: Icon::MapPin,
            title: "Real-time Updates",
            summary: "Get instant notifications about accessibility status changes at stations and stops.",
            details: "Get instant notifications about accessibility status changes at stations and stops. Our system continuously monitors elevator status, ramp availability, and other critical accessibility features.",
            delay: AnimationDelay::millis(200),
        },
        FeatureItem {
            icon: Icon::Bell,
            title: "Custom Alerts",
            summary: "Set up personalized notifications for your frequent routes and stations.",
            details: "Set up personalized notifications for your frequent routes and stations. Never be caught off guard by unexpected accessibility issues during your journey.",
            delay: AnimationDelay::millis(400),
        },
        FeatureItem {
            icon: Icon::Users,
            title: "Community Reports",
            summary: "Contribute and access crowd-sourced accessibility information.",
            details: "Join our community of users who contribute real-time accessibility information. Help others by reporting issues and staying informed about accessibility status.",
            delay: AnimationDelay::millis(600),
        },
    ]
}

pub fn highlight_stats() -> Vec<HighlightStat> {
    vec![
        HighlightStat {
            title: "Elevators Online",
            value: "92%",
            trend: Trend::Up,
            delay: AnimationDelay::millis(200),
        },
        HighlightStat {
            title: "Ramps Available",
            value: "88%",
            trend: Trend::Stable,
            delay: AnimationDelay::millis(400),
        },
        HighlightStat {
            title: "Active Reports",
            value: "24",
            trend: Trend::Up,
            delay: AnimationDelay::millis(600),
        },
    ]
}

fn facilities(
    elevators: CountFraction,
    elevator_state: FacilityState,
    ramps: u32,
    gates: u32,
) -> Vec<FacilityReading> {
    vec![
        FacilityReading {
            name: "Elevators",
            state: elevator_state,
            count: elevators,
        },
        FacilityReading {
            name: "Ramps",
            state: FacilityState::Operational,
            count: CountFraction::new(ramps, ramps),
        },
        FacilityReading {
            name: "Accessible Gates",
            state: FacilityState::Operational,
            count: CountFraction::new(gates, gates),
        },
    ]
}

pub fn station_snapshots() -> Vec<StatusSnapshot> {
    vec![
        StatusSnapshot {
            station: "Central Station",
            summary: "All Systems Operational",
            facilities: facilities(CountFraction::new(4, 4), FacilityState::Operational, 6, 2),
            trend: Trend::Up,
            delay: AnimationDelay::millis(200),
        },
        StatusSnapshot {
            station: "North Terminal",
            summary: "Partial Service Disruption",
            facilities: facilities(CountFraction::new(3, 4), FacilityState::Partial, 4, 2),
            trend: Trend::Down,
            delay: AnimationDelay::millis(400),
        },
        StatusSnapshot {
            station: "South Station",
            summary: "Normal Operations",
            facilities: facilities(CountFraction::new(2, 2), FacilityState::Operational, 3, 1),
            trend: Trend::Stable,
            delay: AnimationDelay::millis(600),
        },
    ]
}

pub fn recent_updates() -> Vec<UpdateEntry> {
    vec![
        UpdateEntry {
            time_label: "10 minutes ago",
            message: "Elevator maintenance completed at Central Station - all elevators now operational",
            severity: UpdateSeverity::Success,
        },
        UpdateEntry {
            time_label: "25 minutes ago",
            message: "North Terminal elevator #2 temporarily out of service - maintenance team en route",
            severity: UpdateSeverity::Warning,
        },
        UpdateEntry {
            time_label: "1 hour ago",
            message: "South Station accessibility features check completed - all systems normal",
            severity: UpdateSeverity::Info,
        },
    ]
}

pub fn how_it_works_steps() -> Vec<HowItWorksStep> {
    vec![
        HowItWorksStep {
            icon: Icon::Smartphone,
            title: "Mobile App Integration",
            description: "Our mobile app connects you to real-time accessibility information. Download the app, set up your profile, and start receiving instant updates about accessibility features in your area.",
            delay: AnimationDelay::millis(200),
        },
        HowItWorksStep {
            icon: Icon::Settings,
            title: "Sensor Network",
            description: "We've installed smart sensors across the transit network to monitor elevator status, ramp availability, and other accessibility features. These sensors provide accurate, real-time data 24/7.",
            delay: AnimationDelay::millis(400),
        },
        HowItWorksStep {
            icon: Icon::Database,
            title: "Data Processing",
            description: "Our advanced algorithms process data from sensors and community reports to provide accurate, up-to-the-minute accessibility information. Machine learning helps predict potential issues before they occur.",
            delay: AnimationDelay::millis(600),
        },
    ]
}

pub fn get_started() -> CallToAction {
    CallToAction {
        title: "Get Started Today",
        body: "Join thousands of users who rely on AccessibleTransit for their daily commute. Download our app or sign up for web notifications to start receiving real-time accessibility updates.",
        delay: AnimationDelay::millis(800),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_of_each_section() {
        assert_eq!(features().len(), 3);
        assert_eq!(highlight_stats().len(), 3);
        assert_eq!(station_snapshots().len(), 3);
        assert_eq!(recent_updates().len(), 3);
        assert_eq!(how_it_works_steps().len(), 3);
    }

    #[test]
    fn test_delays_stagger_in_order() {
        let delays: Vec<_> = features().iter().map(|f| f.delay).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));

        let delays: Vec<_> = station_snapshots().iter().map(|s| s.delay).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_north_terminal_is_partially_disrupted() {
        let snapshots = station_snapshots();
        let north = snapshots
            .iter()
            .find(|s| s.station == "North Terminal")
            .unwrap();
        assert_eq!(north.trend, Trend::Down);
        let elevators = &north.facilities[0];
        assert_eq!(elevators.state, FacilityState::Partial);
        assert_eq!(elevators.count.to_string(), "3/4");
    }

    #[test]
    fn test_feature_details_extend_summaries() {
        for feature in features().iter().take(2) {
            assert!(feature.details.starts_with(feature.summary));
        }
    }

    #[test]
    fn test_every_severity_appears_once() {
        let updates = recent_updates();
        for severity in UpdateSeverity::ALL {
            assert_eq!(updates.iter().filter(|u| u.severity == severity).count(), 1);
        }
    }
}
