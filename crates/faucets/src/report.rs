use crate::filters::FilterArgs;
use crate::prelude::{println, *};
use faucets_core::report::report_form_url;

#[derive(Debug, clap::Args, Clone)]
pub struct ReportOptions {
    #[clap(flatten)]
    pub filters: FilterArgs,

    /// Page the report was started from
    #[arg(long, env = "FAUCETS_PAGE_URL")]
    pub page_url: Option<String>,
}

pub async fn run(options: ReportOptions, global: crate::Global) -> Result<()> {
    let catalog = crate::catalog::load(&global)?;
    let selection = options.filters.selection(&catalog);

    println!("{}", report_form_url(options.page_url.as_deref(), &selection));

    Ok(())
}
