//! The closed set of services a prospective client can request.

use serde::Serialize;

/// A service offering selectable on the onboarding form.
///
/// This is a closed enumeration, not free text: the labels below are the
/// only accepted values, and they double as the wire form in the JSON
/// payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    /// Every selectable service, in display order.
    pub const ALL: [Service; 4] = [
        Service::UiUx,
        Service::Branding,
        Service::WebDev,
        Service::MobileApp,
    ];

    /// Human-readable label, identical to the serialized wire form.
    pub fn label(self) -> &'static str {
        match self {
            Service::UiUx => "UI/UX",
            Service::Branding => "Branding",
            Service::WebDev => "Web Dev",
            Service::MobileApp => "Mobile App",
        }
    }

    /// Parse a label back into a service. Anything outside the closed set
    /// yields `None`.
    pub fn from_label(label: &str) -> Option<Service> {
        Service::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for service in Service::ALL {
            assert_eq!(Service::from_label(service.label()), Some(service));
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(Service::from_label("Nonsense"), None);
        assert_eq!(Service::from_label(""), None);
        // Matching is exact, not case-insensitive.
        assert_eq!(Service::from_label("ui/ux"), None);
    }

    #[test]
    fn serializes_to_the_display_label() {
        let json = serde_json::to_value([Service::UiUx, Service::WebDev]).unwrap();
        assert_eq!(json, serde_json::json!(["UI/UX", "Web Dev"]));
    }
}
