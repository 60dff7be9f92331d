//! Library Service - quest store orchestration
//!
//! This service owns the in-memory [`QuestLibrary`], runs every mutation
//! through it, and writes the durable subset back through the storage port
//! after each one. The library is loaded once at startup; there is no
//! re-read path during a session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use crate::application::dto::{parse_import, ExportDocument};
use crate::application::ports::outbound::LibraryStoragePort;
use crate::application::services::generator_service::QuestGenerator;
use crate::domain::aggregates::QuestLibrary;
use crate::domain::entities::{Quest, QuestTemplate};
use crate::domain::value_objects::{GenerationParams, QuestId, TemplateId};

/// Library service trait defining the quest store use cases
#[async_trait]
pub trait LibraryService: Send + Sync {
    /// Generate one quest and record it as the current batch.
    ///
    /// `params` overrides the stored generation parameters for this call
    /// only; `None` generates with the stored ones.
    async fn generate_quest(&self, params: Option<GenerationParams>) -> Result<Quest>;

    /// Generate a batch of quests, replacing the previous batch.
    async fn generate_quests(
        &self,
        count: usize,
        params: Option<GenerationParams>,
    ) -> Result<Vec<Quest>>;

    /// Generate one quest from a saved template. `None` when the template
    /// does not exist.
    async fn generate_from_template(&self, id: TemplateId) -> Result<Option<Quest>>;

    /// Whether a generation call is currently running.
    fn is_generating(&self) -> bool;

    /// Make a known quest the current selection, returning it. `None` when
    /// the id is unknown; the selection is left as it was.
    async fn set_current_quest(&self, id: QuestId) -> Result<Option<Quest>>;

    /// Drop the generated batch and the current selection. History is
    /// unaffected.
    async fn clear_generated(&self) -> Result<()>;

    /// Replace the stored generation parameters.
    async fn set_params(&self, params: GenerationParams) -> Result<()>;

    /// The stored generation parameters.
    async fn params(&self) -> GenerationParams;

    /// Upsert a quest into the saved collection.
    async fn save_quest(&self, quest: Quest) -> Result<()>;

    /// Delete a saved quest, returning it when it existed.
    async fn delete_quest(&self, id: QuestId) -> Result<Option<Quest>>;

    /// Duplicate any known quest into the saved collection.
    async fn duplicate_quest(&self, id: QuestId) -> Result<Option<Quest>>;

    /// Flip a quest's favorite mark, returning the new state.
    async fn toggle_favorite(&self, id: QuestId) -> Result<bool>;

    async fn is_favorite(&self, id: QuestId) -> bool;

    /// Distill a quest into a reusable template. `None` when the quest is
    /// unknown.
    async fn save_template(
        &self,
        quest_id: QuestId,
        name: String,
        description: String,
    ) -> Result<Option<QuestTemplate>>;

    /// Delete a template, returning it when it existed.
    async fn delete_template(&self, id: TemplateId) -> Result<Option<QuestTemplate>>;

    /// Drop every history entry.
    async fn clear_history(&self) -> Result<()>;

    /// Empty every collection. Generation parameters survive.
    async fn clear_all(&self) -> Result<()>;

    /// Merge an exported document into the saved collection. Returns how
    /// many quests were added; already-saved ids are skipped.
    async fn import_quests(&self, payload: &str) -> Result<usize>;

    /// Render quests as an export document. `None` exports the whole
    /// saved collection.
    async fn export_quests(&self, ids: Option<&[QuestId]>) -> Result<String>;

    /// Look a quest up across saved, history, and the generated batch.
    async fn find_quest(&self, id: QuestId) -> Option<Quest>;

    async fn saved_quests(&self) -> Vec<Quest>;

    async fn quest_history(&self) -> Vec<Quest>;

    async fn favorites(&self) -> Vec<QuestId>;

    async fn templates(&self) -> Vec<QuestTemplate>;

    async fn current_quest(&self) -> Option<Quest>;

    async fn generated_quests(&self) -> Vec<Quest>;
}

/// Default implementation of LibraryService over a storage port
pub struct LibraryServiceImpl {
    library: RwLock<QuestLibrary>,
    storage: Arc<dyn LibraryStoragePort>,
    generator: QuestGenerator,
    generating: AtomicBool,
}

impl LibraryServiceImpl {
    /// Build the service, hydrating the library from storage.
    pub async fn init(storage: Arc<dyn LibraryStoragePort>) -> Result<Self> {
        let library = match storage
            .load()
            .await
            .context("Failed to load quest library")?
        {
            Some(persisted) => {
                info!(
                    saved = persisted.saved_quests.len(),
                    history = persisted.quest_history.len(),
                    templates = persisted.templates.len(),
                    "Loaded quest library"
                );
                QuestLibrary::from_persisted(persisted)
            }
            None => {
                info!("No stored quest library, starting fresh");
                QuestLibrary::new()
            }
        };

        Ok(Self {
            library: RwLock::new(library),
            storage,
            generator: QuestGenerator::new(),
            generating: AtomicBool::new(false),
        })
    }

    async fn persist(&self, library: &QuestLibrary) -> Result<()> {
        self.storage
            .save(&library.to_persisted())
            .await
            .context("Failed to persist quest library")
    }

    /// Run one generation under the in-progress flag. The flag is reset
    /// and the failure logged before the error is handed back, so a bad
    /// run never wedges the service.
    async fn run_generation(
        &self,
        count: usize,
        params: Option<GenerationParams>,
    ) -> Result<Vec<Quest>> {
        self.generating.store(true, Ordering::SeqCst);
        let result = self.generate_and_record(count, params).await;
        self.generating.store(false, Ordering::SeqCst);
        if let Err(err) = &result {
            error!("Quest generation failed: {:#}", err);
        }
        result
    }

    async fn generate_and_record(
        &self,
        count: usize,
        params: Option<GenerationParams>,
    ) -> Result<Vec<Quest>> {
        let mut library = self.library.write().await;
        let effective = match params {
            Some(params) => params,
            None => library.params().clone(),
        };
        let quests = self.generator.generate_many(count, &effective)?;
        library.record_generated(quests.clone());
        self.persist(&library).await?;
        info!(count = quests.len(), "Generated quests");
        Ok(quests)
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    #[instrument(skip(self, params))]
    async fn generate_quest(&self, params: Option<GenerationParams>) -> Result<Quest> {
        let mut quests = self.run_generation(1, params).await?;
        quests.pop().context("Generator returned an empty batch")
    }

    #[instrument(skip(self, params))]
    async fn generate_quests(
        &self,
        count: usize,
        params: Option<GenerationParams>,
    ) -> Result<Vec<Quest>> {
        self.run_generation(count, params).await
    }

    #[instrument(skip(self))]
    async fn generate_from_template(&self, id: TemplateId) -> Result<Option<Quest>> {
        let params = {
            let library = self.library.read().await;
            let Some(template) = library.find_template(id) else {
                debug!(template_id = %id, "Template not found");
                return Ok(None);
            };
            // The snapshot pins type, difficulty, and length; the two
            // include switches follow the stored preferences.
            template.generation_params(
                library.params().include_complications,
                library.params().include_secondary_objectives,
            )
        };

        let mut quests = self.run_generation(1, Some(params)).await?;
        Ok(quests.pop())
    }

    fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    #[instrument(skip(self))]
    async fn set_current_quest(&self, id: QuestId) -> Result<Option<Quest>> {
        let mut library = self.library.write().await;
        let Some(quest) = library.find_quest(id).cloned() else {
            return Ok(None);
        };
        library.set_current(Some(quest.clone()));
        self.persist(&library).await?;
        Ok(Some(quest))
    }

    #[instrument(skip(self))]
    async fn clear_generated(&self) -> Result<()> {
        let mut library = self.library.write().await;
        library.clear_generated();
        self.persist(&library).await
    }

    #[instrument(skip(self, params))]
    async fn set_params(&self, params: GenerationParams) -> Result<()> {
        let mut library = self.library.write().await;
        library.set_params(params);
        self.persist(&library).await
    }

    async fn params(&self) -> GenerationParams {
        self.library.read().await.params().clone()
    }

    #[instrument(skip(self, quest), fields(quest_id = %quest.id))]
    async fn save_quest(&self, quest: Quest) -> Result<()> {
        let mut library = self.library.write().await;
        debug!(title = %quest.title, "Saving quest");
        library.save(quest);
        self.persist(&library).await
    }

    #[instrument(skip(self))]
    async fn delete_quest(&self, id: QuestId) -> Result<Option<Quest>> {
        let mut library = self.library.write().await;
        let removed = library.delete(id);
        self.persist(&library).await?;
        if removed.is_some() {
            info!(quest_id = %id, "Deleted quest");
        }
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn duplicate_quest(&self, id: QuestId) -> Result<Option<Quest>> {
        let mut library = self.library.write().await;
        let Some(original) = library.find_quest(id).cloned() else {
            return Ok(None);
        };
        let copy = library.duplicate(&original);
        self.persist(&library).await?;
        info!(quest_id = %id, copy_id = %copy.id, "Duplicated quest");
        Ok(Some(copy))
    }

    #[instrument(skip(self))]
    async fn toggle_favorite(&self, id: QuestId) -> Result<bool> {
        let mut library = self.library.write().await;
        let now_favorite = if library.is_favorite(id) {
            library.remove_favorite(id);
            false
        } else {
            library.add_favorite(id);
            true
        };
        self.persist(&library).await?;
        Ok(now_favorite)
    }

    async fn is_favorite(&self, id: QuestId) -> bool {
        self.library.read().await.is_favorite(id)
    }

    #[instrument(skip(self, name, description))]
    async fn save_template(
        &self,
        quest_id: QuestId,
        name: String,
        description: String,
    ) -> Result<Option<QuestTemplate>> {
        let mut library = self.library.write().await;
        let Some(quest) = library.find_quest(quest_id) else {
            return Ok(None);
        };
        let template = QuestTemplate::from_quest(quest, name, description);
        library.add_template(template.clone());
        self.persist(&library).await?;
        info!(template_id = %template.id, "Saved quest template");
        Ok(Some(template))
    }

    #[instrument(skip(self))]
    async fn delete_template(&self, id: TemplateId) -> Result<Option<QuestTemplate>> {
        let mut library = self.library.write().await;
        let removed = library.delete_template(id);
        self.persist(&library).await?;
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn clear_history(&self) -> Result<()> {
        let mut library = self.library.write().await;
        library.clear_history();
        self.persist(&library).await
    }

    #[instrument(skip(self))]
    async fn clear_all(&self) -> Result<()> {
        let mut library = self.library.write().await;
        library.clear_all();
        self.persist(&library).await?;
        info!("Cleared quest library");
        Ok(())
    }

    #[instrument(skip(self, payload))]
    async fn import_quests(&self, payload: &str) -> Result<usize> {
        let quests = parse_import(payload)?;
        let mut library = self.library.write().await;
        let added = library.import(quests);
        self.persist(&library).await?;
        info!(added, "Imported quests");
        Ok(added)
    }

    #[instrument(skip(self, ids))]
    async fn export_quests(&self, ids: Option<&[QuestId]>) -> Result<String> {
        let library = self.library.read().await;
        let quests = match ids {
            None => library.saved().to_vec(),
            Some(ids) => {
                let mut quests = Vec::with_capacity(ids.len());
                for id in ids {
                    let quest = library
                        .find_quest(*id)
                        .with_context(|| format!("Quest {} not found", id))?;
                    quests.push(quest.clone());
                }
                quests
            }
        };
        debug!(count = quests.len(), "Exporting quests");
        Ok(ExportDocument::new(quests).to_json()?)
    }

    async fn find_quest(&self, id: QuestId) -> Option<Quest> {
        self.library.read().await.find_quest(id).cloned()
    }

    async fn saved_quests(&self) -> Vec<Quest> {
        self.library.read().await.saved().to_vec()
    }

    async fn quest_history(&self) -> Vec<Quest> {
        self.library.read().await.history().to_vec()
    }

    async fn favorites(&self) -> Vec<QuestId> {
        self.library.read().await.favorites().to_vec()
    }

    async fn templates(&self) -> Vec<QuestTemplate> {
        self.library.read().await.templates().to_vec()
    }

    async fn current_quest(&self) -> Option<Quest> {
        self.library.read().await.current().cloned()
    }

    async fn generated_quests(&self) -> Vec<Quest> {
        self.library.read().await.generated().to_vec()
    }
}
