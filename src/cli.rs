//! Command-line interface implementation for stencil.
//! Provides argument parsing using clap and turns parsed arguments into a
//! resource descriptor.

use crate::constants::{CONFIG_FILE, PH_PREFIX};
use crate::error::{Error, Result};
use crate::resource::Resource;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for stencil.
#[derive(Parser, Debug)]
#[command(version, about = "stencil: AEM project scaffolding from placeholder templates", long_about = None)]
pub struct Args {
    /// Artifact type to generate (component, template, osgi, model, ...)
    #[arg(value_name = "TYPE")]
    pub artifact_type: String,

    /// Name of the source template
    #[arg(value_name = "NAME")]
    pub source_name: String,

    /// Name of the generated artifact
    #[arg(value_name = "TARGET_NAME")]
    pub target_name: String,

    /// Extra placeholders as KEY=VALUE pairs, substituted wherever PH_<KEY>
    /// appears in paths or content
    #[arg(value_name = "PARAMS")]
    pub params: Vec<String>,

    /// Path to the configuration properties file
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Builds the resource descriptor from parsed arguments.
///
/// Each `KEY=VALUE` parameter is registered under the sentinel token
/// `PH_<KEY>`; anything without a `=` is a usage error.
pub fn build_resource(args: &Args) -> Result<Resource> {
    let mut resource = Resource::new(
        args.artifact_type.as_str(),
        args.source_name.as_str(),
        args.target_name.as_str(),
    );

    for param in &args.params {
        let Some((key, value)) = param.split_once('=') else {
            return Err(Error::Config(format!(
                "invalid parameter [{param}], expected KEY=VALUE"
            )));
        };
        resource.add_placeholder(format!("{PH_PREFIX}{}", key.trim()), value.to_string());
    }

    Ok(resource)
}
