use crate::settings;
use advocates_ui::UiConfig;
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
    /// Search API base URL [env: ADVOCATES_API_URL] [default: http://localhost:3000]
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

pub fn execute(args: BrowseArgs) -> Result<()> {
    let config = UiConfig {
        api_url: settings::api_url(args.api_url),
    };
    advocates_ui::tui::run(&config)
}
