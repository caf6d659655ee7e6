use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// General document metadata such as title, author, etc
#[derive(Default, Debug, Clone)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords for the document, conventionally comma separated
    pub keywords: Option<String>,
    /// When the document was created. Defaults to the time it is written.
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Pin the creation date instead of using the time the document is written
    pub fn created(&mut self, created: DateTime<FixedOffset>) -> &mut Self {
        self.created = Some(created);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let created = self
            .created
            .unwrap_or_else(|| Local::now().fixed_offset());
        info.creation_date(pdf_date(&created));
    }
}

fn pdf_date(when: &DateTime<FixedOffset>) -> PDate {
    let (offset_hours, offset_minutes) = utc_offset(when.offset().local_minus_utc());
    PDate::new(when.year() as u16)
        .month(when.month() as u8)
        .day(when.day() as u8)
        .hour(when.hour() as u8)
        .minute(when.minute() as u8)
        .second(when.second() as u8)
        .utc_offset_hour(offset_hours)
        .utc_offset_minute(offset_minutes)
}

/// Split an offset from UTC in seconds into signed hours and unsigned minutes, the way
/// PDF dates express it
fn utc_offset(seconds: i32) -> (i8, u8) {
    let hours = seconds / (60 * 60);
    let minutes = ((seconds - hours * 60 * 60) / 60).abs();
    (hours as i8, minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_split_into_hours_and_minutes() {
        assert_eq!(utc_offset(0), (0, 0));
        assert_eq!(utc_offset(2 * 3600), (2, 0));
        assert_eq!(utc_offset(-(5 * 3600 + 30 * 60)), (-5, 30));
        assert_eq!(utc_offset(9 * 3600 + 45 * 60), (9, 45));
    }

    #[test]
    fn builder_sets_fields() {
        let mut info = Info::new();
        info.title("Justified").author("Someone").keywords("pdf, text");
        assert_eq!(info.title.as_deref(), Some("Justified"));
        assert_eq!(info.author.as_deref(), Some("Someone"));
        assert_eq!(info.subject, None);
        assert_eq!(info.keywords.as_deref(), Some("pdf, text"));
    }
}
