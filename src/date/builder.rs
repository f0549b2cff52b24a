// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::ZipDateTime;

/// A builder for [`ZipDateTime`].
pub struct ZipDateTimeBuilder(pub(crate) ZipDateTime);

impl From<ZipDateTime> for ZipDateTimeBuilder {
    fn from(date: ZipDateTime) -> Self {
        Self(date)
    }
}

impl Default for ZipDateTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Each field is masked to its bit range before narrowing, so the casts below never truncate.
impl ZipDateTimeBuilder {
    /// Constructs a new builder with every field zeroed.
    pub fn new() -> Self {
        Self(ZipDateTime { date: 0, time: 0 })
    }

    /// Sets the date and time's year.
    pub fn year(mut self, year: i32) -> Self {
        self.0.date |= (((year - 1980) << 9) & 0xFE00) as u16;
        self
    }

    /// Sets the date and time's month.
    pub fn month(mut self, month: u32) -> Self {
        self.0.date |= ((month << 5) & 0x1E0) as u16;
        self
    }

    /// Sets the date and time's day.
    pub fn day(mut self, day: u32) -> Self {
        self.0.date |= (day & 0x1F) as u16;
        self
    }

    /// Sets the date and time's hour.
    pub fn hour(mut self, hour: u32) -> Self {
        self.0.time |= ((hour << 11) & 0xF800) as u16;
        self
    }

    /// Sets the date and time's minute.
    pub fn minute(mut self, minute: u32) -> Self {
        self.0.time |= ((minute << 5) & 0x7E0) as u16;
        self
    }

    /// Sets the date and time's second.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(mut self, second: u32) -> Self {
        self.0.time |= ((second >> 1) & 0x1F) as u16;
        self
    }

    /// Consumes this builder and returns a final [`ZipDateTime`].
    ///
    /// This is equivalent to:
    /// ```
    /// # use zip_session::{ZipDateTime, ZipDateTimeBuilder};
    /// #
    /// # let builder = ZipDateTimeBuilder::new().year(2024).month(3).day(2);
    /// let date: ZipDateTime = builder.into();
    /// ```
    pub fn build(self) -> ZipDateTime {
        self.into()
    }
}
