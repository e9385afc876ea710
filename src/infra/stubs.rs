use anyhow::Result;

use crate::usecases::send_message::{MessagePersistence, PersistRecord};

/// Persistence collaborator used until a backend exists; accepts and drops records.
#[derive(Debug, Clone, Default)]
pub struct NoopPersistence;

impl MessagePersistence for NoopPersistence {
    fn persist(&mut self, record: &PersistRecord) -> Result<()> {
        tracing::trace!(
            author_id = %record.author_id,
            content_chars = record.content.chars().count(),
            is_ephemeral = record.is_ephemeral,
            "persistence disabled, record dropped"
        );
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingPersistence {
    pub records: Vec<PersistRecord>,
    pub fail: bool,
}

#[cfg(test)]
impl MessagePersistence for RecordingPersistence {
    fn persist(&mut self, record: &PersistRecord) -> Result<()> {
        self.records.push(record.clone());
        if self.fail {
            anyhow::bail!("backend unavailable");
        }
        Ok(())
    }
}
