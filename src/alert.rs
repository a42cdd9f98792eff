//! Alert message templates
//!
//! Pure formatting of backup/restore/validation reports into WhatsApp-markup
//! text blocks. Field values are interpolated verbatim (no escaping); the
//! target chat renders `*bold*` and `` `code` `` markup itself.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The closed set of alert categories accepted on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    BackupSuccess,
    BackupFailure,
    RestoreSuccess,
    RestoreFailure,
    ValidationFailure,
    ValidationSuccess,
}

impl AlertKind {
    pub const ALL: [AlertKind; 6] = [
        AlertKind::BackupSuccess,
        AlertKind::BackupFailure,
        AlertKind::RestoreSuccess,
        AlertKind::RestoreFailure,
        AlertKind::ValidationFailure,
        AlertKind::ValidationSuccess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::BackupSuccess => "backup_success",
            AlertKind::BackupFailure => "backup_failure",
            AlertKind::RestoreSuccess => "restore_success",
            AlertKind::RestoreFailure => "restore_failure",
            AlertKind::ValidationFailure => "validation_failure",
            AlertKind::ValidationSuccess => "validation_success",
        }
    }

    fn header(&self) -> &'static str {
        match self {
            AlertKind::BackupSuccess => "✅ *Backup Completed Successfully!* ✅",
            AlertKind::BackupFailure => "🚨 *Backup Failed!* 🚨",
            AlertKind::RestoreSuccess => "✅ *Restoration Completed Successfully!* ✅",
            AlertKind::RestoreFailure => "🚨 *Restoration Failed!* 🚨",
            AlertKind::ValidationFailure => "❌ *Validation Failed!* ❌",
            AlertKind::ValidationSuccess => "✅ *Validation Success!* ✅",
        }
    }

    /// Label for the database field (restores report the restored name)
    fn database_label(&self) -> &'static str {
        match self {
            AlertKind::RestoreSuccess => "Restored Database",
            _ => "Database",
        }
    }

    /// Label for the backup file field (failed backups report the attempted path)
    fn backup_file_label(&self) -> &'static str {
        match self {
            AlertKind::BackupFailure => "Attempted Backup Path",
            _ => "Backup File",
        }
    }

    /// Whether this kind carries a trailing error block
    fn has_error_block(&self) -> bool {
        matches!(
            self,
            AlertKind::BackupFailure | AlertKind::RestoreFailure | AlertKind::ValidationFailure
        )
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backup_success" => Ok(AlertKind::BackupSuccess),
            "backup_failure" => Ok(AlertKind::BackupFailure),
            "restore_success" => Ok(AlertKind::RestoreSuccess),
            "restore_failure" => Ok(AlertKind::RestoreFailure),
            "validation_failure" => Ok(AlertKind::ValidationFailure),
            "validation_success" => Ok(AlertKind::ValidationSuccess),
            other => Err(Error::UnknownAlertKind(other.to_string())),
        }
    }
}

/// Report fields interpolated into an alert. Absent fields render as
/// the literal `unknown`.
#[derive(Debug, Clone, Default)]
pub struct AlertReport {
    pub server: Option<String>,
    pub database: Option<String>,
    pub backup_file: Option<String>,
    pub timestamp: Option<String>,
    pub error_message: Option<String>,
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}

/// Render an alert as a WhatsApp message body.
///
/// Field order is fixed: timestamp, server, database, backup file, then the
/// error block for failure kinds.
pub fn render(kind: AlertKind, report: &AlertReport) -> String {
    let mut text = format!(
        "{}\n\n\
         🔹 *Timestamp:* `{}`\n\
         🔹 *Server:* `{}`\n\
         🔹 *{}:* `{}`\n\
         🔹 *{}:* `{}`",
        kind.header(),
        field(&report.timestamp),
        field(&report.server),
        kind.database_label(),
        field(&report.database),
        kind.backup_file_label(),
        field(&report.backup_file),
    );

    if kind.has_error_block() {
        text.push_str(&format!(
            "\n\n*Error Message: *\n```\n{}\n```",
            field(&report.error_message)
        ));
    }

    text
}
