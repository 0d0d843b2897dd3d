//! Site behaviour configuration.
//!
//! Every value has a default, so an empty document is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    error::{FolioError, Result},
    mail::MailDelivery,
};

/// Main configuration structure for the page script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Page loader timings.
    pub loader: LoaderConfig,

    /// Scroll reveal observation settings.
    pub reveal: RevealConfig,

    /// Navbar style switch settings.
    pub navbar: NavbarConfig,

    /// Button ripple settings.
    pub ripple: RippleConfig,

    /// Toast notification timings.
    pub toast: ToastConfig,

    /// Transactional email service settings.
    pub mail: MailConfig,
}

/// Loader configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Minimum time the loader stays up on the fast paths.
    pub min_display_ms: u64,

    /// Unconditional upper bound before the loader hides.
    pub safety_timeout_ms: u64,

    /// Length of the fade-out transition.
    pub fade_ms: u64,
}

/// Scroll reveal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that counts as intersecting for reveal targets.
    pub threshold: f64,

    /// Observer root margin (CSS margin syntax).
    pub root_margin: String,

    /// Visible fraction that starts a skill bar animation.
    pub skill_threshold: f64,
}

/// Navbar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Vertical offset (px) above which the navbar is "scrolled".
    pub scroll_threshold: f64,
}

/// Ripple configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    /// How long a ripple element lives.
    pub lifetime_ms: u64,
}

/// Toast configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Delay between insertion and the entrance state flip.
    pub enter_delay_ms: u64,

    /// Time from creation until auto-dismiss starts.
    pub visible_ms: u64,

    /// Time from dismissal until the element is detached.
    pub exit_ms: u64,
}

/// Mail service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// HTTP endpoint accepting send requests.
    pub endpoint: String,

    /// Service identifier.
    pub service_id: String,

    /// Template identifier.
    pub template_id: String,

    /// Public account key sent as `user_id`.
    pub public_key: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            min_display_ms: 800,
            safety_timeout_ms: 3000,
            fade_ms: 500,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            skill_threshold: 0.5,
        }
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 100.0,
        }
    }
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self { lifetime_ms: 600 }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            visible_ms: 5000,
            exit_ms: 300,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: "service_mcqdcm7".to_string(),
            template_id: "template_en7uyv7".to_string(),
            public_key: String::new(),
        }
    }
}

impl LoaderConfig {
    pub fn min_display(&self) -> Duration {
        Duration::from_millis(self.min_display_ms)
    }

    pub fn safety_timeout(&self) -> Duration {
        Duration::from_millis(self.safety_timeout_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl ToastConfig {
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn visible(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

impl MailConfig {
    /// Without a public key the page's own SDK carries the send.
    pub fn delivery(&self) -> MailDelivery {
        if self.public_key.is_empty() {
            MailDelivery::PageSdk
        } else {
            MailDelivery::Rest
        }
    }
}

impl RippleConfig {
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms)
    }
}

impl FolioConfig {
    /// Load configuration from a TOML document.
    ///
    /// Goes through the config crate so later layers can be stacked on top
    /// of the embedded document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        let config: FolioConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("reveal.threshold", self.reveal.threshold),
            ("reveal.skill_threshold", self.reveal.skill_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(FolioError::config(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }

        if self.toast.visible_ms == 0 {
            return Err(FolioError::config("toast.visible_ms cannot be zero"));
        }

        if self.mail.service_id.is_empty() {
            return Err(FolioError::config("mail.service_id cannot be empty"));
        }

        if self.mail.template_id.is_empty() {
            return Err(FolioError::config("mail.template_id cannot be empty"));
        }

        if !(self.mail.endpoint.starts_with("https://") || self.mail.endpoint.starts_with("http://"))
        {
            return Err(FolioError::config(format!(
                "mail.endpoint must be an http(s) URL, got `{}`",
                self.mail.endpoint
            )));
        }

        if self.mail.public_key.is_empty() {
            log::info!("mail.public_key is empty; sends go through the page's emailjs SDK");
        }

        Ok(())
    }
}
