//! Generation runner: wires configuration, resource, replacer, and the
//! filesystem commands into one invocation.

use crate::commands;
use crate::config::{self, ConfigurationSet};
use crate::error::{Error, Result};
use crate::replacer::Replacer;
use crate::resource::Resource;
use crate::selector::{self, artifact_spec};
use crate::walker;
use log::info;

/// One generation invocation. Owns its configuration, resource, and
/// replacer; nothing is shared across invocations.
pub struct Runner {
    config: ConfigurationSet,
    resource: Resource,
    replacer: Replacer,
}

impl Runner {
    /// Prepares a run: validates the configuration, binds the per-type
    /// template source and target folders to the resource, and selects the
    /// replacer variant. Fails before any file is touched.
    pub fn new(config: ConfigurationSet, mut resource: Resource) -> Result<Self> {
        let spec = artifact_spec(resource.artifact_type())?;

        if !config::check_configuration(&config) {
            return Err(Error::Config(
                "invalid or missing configuration properties".to_string(),
            ));
        }

        let source_folder = config.get(spec.source_folder_key).cloned().ok_or_else(|| {
            Error::Config(format!(
                "missing key [{}] in the configuration properties",
                spec.source_folder_key
            ))
        })?;
        let target_folder = config.get(spec.target_folder_key).cloned().ok_or_else(|| {
            Error::Config(format!(
                "missing key [{}] in the configuration properties",
                spec.target_folder_key
            ))
        })?;
        resource.set_source_folder_path(source_folder);
        resource.set_target_folder_path(target_folder);

        let replacer = selector::select(&resource, &config)?;
        Ok(Self { config, resource, replacer })
    }

    /// Executes the invocation strictly in order: copy the template, replace
    /// content placeholders, rewrite paths.
    pub fn run(&self) -> Result<()> {
        let target = commands::copy_template(&self.resource)?;

        let extensions = commands::extension_matcher(&config::config_extensions(&self.config))?;
        commands::replace_content_placeholders(&target, &self.replacer, &self.resource, &extensions)?;

        walker::rewrite(&target, &self.replacer)?;

        info!("Created [{}]", target.display());
        Ok(())
    }
}
