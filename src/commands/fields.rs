//! Field listing command.

use crate::api::Fieldsy;
use crate::libs::config::Config;
use crate::libs::filter::{filter_records, selection, DogsRange, FieldFilters, RecordFilter};
use crate::libs::messages::Message;
use crate::libs::paginator::{paginate, PageState};
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_print};
use chrono::Local;
use clap::Args;
use std::error::Error;

#[derive(Debug, Args)]
pub struct FieldsArgs {
    #[arg(long, short, default_value = "", help = "Search by field id, name or owner")]
    search: String,
    #[arg(long, default_value = "All", help = "Field status (Active, Pending, Suspended) or All")]
    status: String,
    #[arg(long, default_value = "All", help = "Capacity bucket: All, 1-5 or 6+")]
    max_dogs: String,
    #[arg(long, default_value = "", help = "City substring to match")]
    location: String,
    #[arg(long, short, default_value_t = 1, help = "Page to display")]
    page: usize,
    #[arg(long, help = "Rows per page (defaults to the configured value)")]
    per_page: Option<usize>,
}

pub async fn cmd(args: FieldsArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::read()?;
    let api = config.api()?.clone();
    let display = config.display();
    let per_page = args.per_page.unwrap_or(display.per_page).max(1);
    let mut client = Fieldsy::new(&api);

    let filters = FieldFilters {
        search: args.search.clone(),
        status: selection(&args.status),
        max_dogs: DogsRange::parse(&args.max_dogs)
            .ok_or_else(|| msg_error_anyhow!(Message::UnknownDogsRange(args.max_dogs.clone())))?,
        location: args.location.clone(),
    };

    if !filters.is_active() {
        let envelope = client.fields(args.page as u64, per_page as u64).await?;
        if envelope.items.is_empty() {
            msg_info!(Message::NoRecordsFound("fields".to_string()));
            return Ok(());
        }
        View::fields(&envelope.items)?;
        View::page_footer(args.page, envelope.pages as usize, display.page_window);
        return Ok(());
    }

    let records = client.all_fields().await?;
    let today = Local::now().date_naive();
    let filtered = filter_records(&records, &filters, today);
    if filtered.is_empty() {
        msg_info!(Message::NoRecordsFound("fields".to_string()));
        return Ok(());
    }

    msg_print!(Message::FilteredRecords(filtered.len(), records.len()));
    let mut state = PageState::new(per_page, filtered.len());
    state.set_page(args.page);
    View::fields(paginate(&filtered, state.current_page, state.items_per_page))?;
    View::page_footer(state.current_page, state.total_pages(), display.page_window);
    Ok(())
}
