//! AWS session bootstrap: resolve credentials and region once per run.
//!
//! Credential and region lookup is delegated entirely to `aws-config`'s
//! default provider chain. This module only layers the two CLI overrides on
//! top of it and refuses to continue when no region comes out the other end,
//! because every Textract call needs one and the SDK's own error for a
//! missing region is not actionable.
//!
//! Region resolution order:
//!
//! 1. `--region` flag
//! 2. `AWS_REGION` environment variable
//! 3. `[profile <name>]` section of `~/.aws/config`
//! 4. `[default]` section of `~/.aws/config`

use crate::error::ScribeshotError;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_textract::config::Region;
use tracing::debug;

/// Loaded SDK configuration plus the region it resolved to.
///
/// Built once at startup and handed to [`crate::pipeline::detect::TextractDetector::new`].
#[derive(Debug, Clone)]
pub struct Session {
    sdk_config: SdkConfig,
    region: Region,
}

impl Session {
    /// Load the SDK configuration, honouring optional profile and region overrides.
    ///
    /// Empty strings are treated as "not given".
    ///
    /// # Errors
    /// [`ScribeshotError::RegionNotConfigured`] if no region resolves.
    pub async fn bootstrap(
        profile: Option<&str>,
        region: Option<&str>,
    ) -> Result<Self, ScribeshotError> {
        let profile = profile.filter(|p| !p.is_empty());
        let region = region.filter(|r| !r.is_empty());

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(name) = profile {
            debug!("Using AWS profile '{}'", name);
            loader = loader.profile_name(name);
        }
        if let Some(r) = region {
            debug!("Region overridden by flag: {}", r);
            loader = loader.region(Region::new(r.to_string()));
        }

        let sdk_config = loader.load().await;
        let region = require_region(sdk_config.region(), profile)?;

        Ok(Self { sdk_config, region })
    }

    pub fn sdk_config(&self) -> &SdkConfig {
        &self.sdk_config
    }

    pub fn region(&self) -> &Region {
        &self.region
    }
}

/// The profile name shown in the remediation message.
pub fn display_profile(profile: Option<&str>) -> &str {
    match profile {
        Some(p) if !p.is_empty() => p,
        _ => "default",
    }
}

fn require_region(
    resolved: Option<&Region>,
    profile: Option<&str>,
) -> Result<Region, ScribeshotError> {
    match resolved {
        Some(r) if !r.as_ref().is_empty() => Ok(r.clone()),
        _ => Err(ScribeshotError::RegionNotConfigured {
            profile: display_profile(profile).to_string(),
        }),
    }
}
