use crate::constants::DEFAULT_SHEET_NAME;

/// Options handed to whichever reader matches the file extension.
/// CSV ignores the sheet settings, XLSX ignores the delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub has_headers: bool,
    /// Sheet to read; the first sheet when unset.
    pub sheet_name: Option<String>,
    pub infer_types: bool,
    /// Leading lines/rows dropped before the header.
    pub skip_rows: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            sheet_name: None,
            infer_types: true,
            skip_rows: 0,
        }
    }
}

impl ReadOptions {
    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(&mut self, yes: bool) -> &mut Self {
        self.has_headers = yes;
        self
    }

    pub fn sheet_name<S: AsRef<str>>(&mut self, name: S) -> &mut Self {
        self.sheet_name = Some(name.as_ref().to_string());
        self
    }

    pub fn infer_types(&mut self, yes: bool) -> &mut Self {
        self.infer_types = yes;
        self
    }

    pub fn skip_rows(&mut self, n: usize) -> &mut Self {
        self.skip_rows = n;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub delimiter: u8,
    pub has_headers: bool,
    pub sheet_name: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl WriteOptions {
    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_headers(&mut self, yes: bool) -> &mut Self {
        self.has_headers = yes;
        self
    }

    pub fn sheet_name<S: AsRef<str>>(&mut self, name: S) -> &mut Self {
        self.sheet_name = name.as_ref().to_string();
        self
    }
}
