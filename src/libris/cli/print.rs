use colored::Colorize;
use libris::api::{CmdMessage, MessageLevel};
use libris::model::{Book, LateFee, PatronStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;
const AUTHOR_WIDTH: usize = 24;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_books(books: &[Book]) {
    if books.is_empty() {
        return;
    }

    for book in books {
        let id = format!("{:>4}. ", book.id);
        let title = pad_to_width(&truncate_to_width(&book.title, TITLE_WIDTH), TITLE_WIDTH);
        let author = pad_to_width(&truncate_to_width(&book.author, AUTHOR_WIDTH), AUTHOR_WIDTH);
        let copies = format!("{}/{}", book.available_copies, book.total_copies);
        let copies = if book.is_available() {
            copies.green()
        } else {
            copies.red()
        };

        println!(
            "{}{} {} {} {:>7}",
            id.yellow(),
            title.bold(),
            author,
            book.isbn.dimmed(),
            copies
        );
    }
}

pub(crate) fn print_late_fee(fee: &LateFee) {
    println!("Late fee: ${:.2}", fee.fee_amount);
    println!("{}", fee.status.dimmed());
}

pub(crate) fn print_patron_status(status: &PatronStatus) {
    for (key, value) in status {
        println!("{}: {}", key.bold(), value);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
