//! Legal registration footer.
//!
//! The footer is static: [`FooterConfig::items`] decides what is shown and in
//! which order, and the browser layer turns those items into DOM nodes.

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterConfig {
    /// Master switch. When false the footer renders nothing.
    pub enabled: bool,
    pub registration_number: String,
    pub registration_url: String,
    pub network_security_registration: Option<NetworkSecurityRegistration>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkSecurityRegistration {
    pub number: String,
    pub url: String,
    pub icon_path: String,
}

/// One `icp-footer-item` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FooterItem {
    /// Icon followed by a link carrying the registration number.
    NetworkSecurity {
        icon: String,
        text: String,
        href: String,
    },
    Registration { text: String, href: String },
}

impl FooterItem {
    pub fn text(&self) -> &str {
        match self {
            Self::NetworkSecurity { text, .. } | Self::Registration { text, .. } => text,
        }
    }

    pub fn href(&self) -> &str {
        match self {
            Self::NetworkSecurity { href, .. } | Self::Registration { href, .. } => href,
        }
    }
}

impl FooterConfig {
    /// Entries in display order: the secondary registration first, then the
    /// primary one. Empty when the footer is disabled.
    pub fn items(&self) -> Vec<FooterItem> {
        if !self.enabled {
            return Vec::new();
        }
        let mut items = Vec::with_capacity(2);
        if let Some(sec) = &self.network_security_registration {
            items.push(FooterItem::NetworkSecurity {
                icon: sec.icon_path.clone(),
                text: sec.number.clone(),
                href: sec.url.clone(),
            });
        }
        if !self.registration_number.is_empty() {
            items.push(FooterItem::Registration {
                text: format!("ICP备案号: {}", self.registration_number),
                href: self.registration_url.clone(),
            });
        }
        items
    }
}
