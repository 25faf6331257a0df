use crate::libs::messages::Message;
use crate::libs::paginator::{page_window, PageMarker};
use crate::libs::records::{Booking, Claim, Field, Payment, Review, User};
use crate::libs::status::display_text;
use crate::msg_print;
use prettytable::{row, Table};
use std::error::Error;

const MISSING: &str = "-";

pub struct View {}

impl View {
    pub fn bookings(bookings: &[Booking]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "TIME", "DURATION", "DOGS", "FIELD", "CUSTOMER", "PRICE", "STATUS"]);
        for booking in bookings {
            table.add_row(row![
                booking.id,
                booking.day().map_or_else(|| MISSING.to_string(), |d| d.format("%Y-%m-%d").to_string()),
                format!(
                    "{} - {}",
                    booking.start_time.as_deref().unwrap_or(MISSING),
                    booking.end_time.as_deref().unwrap_or(MISSING)
                ),
                booking.duration(),
                booking.number_of_dogs.map_or_else(|| MISSING.to_string(), |n| n.to_string()),
                booking.field.as_ref().and_then(|f| f.name.as_deref()).unwrap_or(MISSING),
                booking.user.as_ref().and_then(|u| u.name.as_deref()).unwrap_or(MISSING),
                booking.total_price.map_or_else(|| MISSING.to_string(), |p| format!("£{:.2}", p)),
                display_text(&booking.status)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn fields(fields: &[Field]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CITY", "MAX DOGS", "PRICE/HR", "OWNER", "STATUS"]);
        for field in fields {
            table.add_row(row![
                field.id,
                field.name.as_deref().unwrap_or(MISSING),
                field.city.as_deref().unwrap_or(MISSING),
                field.max_dogs.map_or_else(|| MISSING.to_string(), |n| n.to_string()),
                field.price_per_hour.map_or_else(|| MISSING.to_string(), |p| format!("£{:.2}", p)),
                field.owner.as_ref().and_then(|o| o.name.as_deref()).unwrap_or(MISSING),
                display_text(&field.status)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn users(users: &[User]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "ROLE", "JOINED", "STATUS"]);
        for user in users {
            table.add_row(row![
                user.id,
                user.name.as_deref().unwrap_or(MISSING),
                user.email.as_deref().unwrap_or(MISSING),
                display_text(&user.role),
                user.day().map_or_else(|| MISSING.to_string(), |d| d.format("%Y-%m-%d").to_string()),
                display_text(&user.status)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn claims(claims: &[Claim]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "FIELD", "CLAIMANT", "FILED", "STATUS"]);
        for claim in claims {
            table.add_row(row![
                claim.id,
                claim.field.as_ref().and_then(|f| f.name.as_deref()).unwrap_or(MISSING),
                claim.email.as_deref().unwrap_or(MISSING),
                claim.day().map_or_else(|| MISSING.to_string(), |d| d.format("%Y-%m-%d").to_string()),
                display_text(&claim.status)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn payments(payments: &[Payment]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "BOOKING", "CUSTOMER", "AMOUNT", "DATE", "STATUS"]);
        for payment in payments {
            table.add_row(row![
                payment.id,
                payment.booking_id.as_deref().unwrap_or(MISSING),
                payment.user.as_ref().and_then(|u| u.name.as_deref()).unwrap_or(MISSING),
                payment.amount.map_or_else(|| MISSING.to_string(), |a| format!("£{:.2}", a)),
                payment.day().map_or_else(|| MISSING.to_string(), |d| d.format("%Y-%m-%d").to_string()),
                display_text(&payment.status)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn reviews(reviews: &[Review]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "FIELD", "CUSTOMER", "RATING", "COMMENT", "DATE"]);
        for review in reviews {
            table.add_row(row![
                review.id,
                review.field.as_ref().and_then(|f| f.name.as_deref()).unwrap_or(MISSING),
                review.user.as_ref().and_then(|u| u.name.as_deref()).unwrap_or(MISSING),
                review.rating.map_or_else(|| MISSING.to_string(), |r| format!("{:.1}", r)),
                review.comment.as_deref().unwrap_or(MISSING),
                review.day().map_or_else(|| MISSING.to_string(), |d| d.format("%Y-%m-%d").to_string())
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the pagination footer: `Page 7 of 20` plus the compressed
    /// page controls, e.g. `1 ... 5 6 [7] 8 9 ... 20`.
    pub fn page_footer(current: usize, total_pages: usize, max_visible: usize) {
        let controls = page_window(current, total_pages, max_visible)
            .iter()
            .map(|marker| match marker {
                PageMarker::Page(page) if *page == current.clamp(1, total_pages.max(1)) => format!("[{}]", page),
                PageMarker::Page(page) => page.to_string(),
                PageMarker::Ellipsis => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");

        msg_print!(Message::PageOf(current.clamp(1, total_pages.max(1)), total_pages.max(1)));
        println!("{}", controls);
    }
}
