use pemode_core::{Classification, Error, Image};
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Image,
    Invalid,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClrDirectory {
    pub virtual_address: u32,
    pub size: u32,
}

/// Per-file result, flattened for printing and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub path: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dll: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clr_directory: Option<ClrDirectory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Report {
    fn empty(path: String, status: Status) -> Self {
        Self {
            path,
            status,
            runtime: None,
            bitness: None,
            format: None,
            machine: None,
            dll: None,
            clr_directory: None,
            message: None,
        }
    }

    pub fn from_image(image: &Image) -> Self {
        let path = image.path.display().to_string();
        match image.classification() {
            Classification::Invalid(reason) => Self {
                message: Some(reason.to_string()),
                ..Self::empty(path, Status::Invalid)
            },
            Classification::Image(mode) => {
                let mut report = Self {
                    runtime: Some(mode.runtime.to_string()),
                    bitness: Some(mode.bitness.to_string()),
                    ..Self::empty(path, Status::Image)
                };
                if let Some(header) = image.header() {
                    report.format = Some(header.layout.name());
                    report.machine = Some(header.file_header.machine_name());
                    report.dll = Some(header.file_header.is_dll());
                    report.clr_directory = Some(ClrDirectory {
                        virtual_address: header.clr_directory.virtual_address,
                        size: header.clr_directory.size,
                    });
                }
                report
            }
        }
    }

    pub fn from_error(path: &str, err: &Error) -> Self {
        Self {
            message: Some(err.to_string()),
            ..Self::empty(path.to_string(), Status::Error)
        }
    }

    /// Text lines in the `Image: …` / `Bitness: …` style.
    pub fn text_lines(&self, verbose: bool) -> Vec<String> {
        let mut lines = Vec::new();
        match self.status {
            Status::Error => {
                lines.push(format!("ERROR: {}", self.message.as_deref().unwrap_or("")));
            }
            Status::Invalid => {
                lines.push("INFO: Unknown compilation mode".to_string());
                if verbose {
                    if let Some(message) = &self.message {
                        lines.push(format!("Reason: {}", message));
                    }
                }
            }
            Status::Image => {
                if let Some(runtime) = &self.runtime {
                    lines.push(format!("Image: {}", runtime));
                }
                if let Some(bitness) = &self.bitness {
                    lines.push(format!("Bitness: {}", bitness));
                }
                if verbose {
                    if let Some(format) = self.format {
                        lines.push(format!("Format: {}", format));
                    }
                    if let Some(machine) = &self.machine {
                        lines.push(format!("Machine: {}", machine));
                    }
                    if let Some(dll) = self.dll {
                        lines.push(format!("DLL: {}", if dll { "yes" } else { "no" }));
                    }
                    if let Some(dir) = &self.clr_directory {
                        lines.push(format!(
                            "CLR directory: rva 0x{:x}, size {}",
                            dir.virtual_address, dir.size
                        ));
                    }
                }
            }
        }
        lines
    }

    pub fn row(&self) -> Row {
        let dash = || "-".to_string();
        Row {
            path: self.path.clone(),
            runtime: self.runtime.clone().unwrap_or_else(dash),
            bitness: self.bitness.clone().unwrap_or_else(dash),
            machine: self.machine.clone().unwrap_or_else(dash),
            note: match self.status {
                Status::Image => String::new(),
                _ => self.message.clone().unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct Row {
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Image")]
    pub runtime: String,
    #[tabled(rename = "Bitness")]
    pub bitness: String,
    #[tabled(rename = "Machine")]
    pub machine: String,
    #[tabled(rename = "Note")]
    pub note: String,
}
