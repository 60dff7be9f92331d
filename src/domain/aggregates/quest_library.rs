//! Quest library aggregate - every quest collection the tool tracks
//!
//! All mutations go through this aggregate so the cross-collection rules
//! hold in one place: deleting a saved quest also drops its favorite mark
//! and the current selection, the history never exceeds its cap, and the
//! generated batch is always replaced wholesale.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Quest, QuestTemplate};
use crate::domain::value_objects::{GenerationParams, QuestId, TemplateId};

/// Most recent generations kept in the history, oldest evicted first.
pub const HISTORY_CAP: usize = 100;

/// Aggregate root over the generated batch, the current selection, and
/// the saved/history/favorites/templates collections.
#[derive(Debug, Clone)]
pub struct QuestLibrary {
    generated: Vec<Quest>,
    current: Option<Quest>,
    saved: Vec<Quest>,
    history: Vec<Quest>,
    favorites: Vec<QuestId>,
    templates: Vec<QuestTemplate>,
    params: GenerationParams,
}

impl Default for QuestLibrary {
    fn default() -> Self {
        Self::from_persisted(PersistedLibrary::default())
    }
}

impl QuestLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a library from its persisted subset. The generated batch
    /// and current selection are session-only and start empty.
    pub fn from_persisted(persisted: PersistedLibrary) -> Self {
        Self {
            generated: Vec::new(),
            current: None,
            saved: persisted.saved_quests,
            history: persisted.quest_history,
            favorites: persisted.favorites,
            templates: persisted.templates,
            params: persisted.generation_params,
        }
    }

    /// The durable subset of this library.
    pub fn to_persisted(&self) -> PersistedLibrary {
        PersistedLibrary {
            saved_quests: self.saved.clone(),
            quest_history: self.history.clone(),
            favorites: self.favorites.clone(),
            templates: self.templates.clone(),
            generation_params: self.params.clone(),
        }
    }

    pub fn generated(&self) -> &[Quest] {
        &self.generated
    }

    pub fn current(&self) -> Option<&Quest> {
        self.current.as_ref()
    }

    pub fn saved(&self) -> &[Quest] {
        &self.saved
    }

    pub fn history(&self) -> &[Quest] {
        &self.history
    }

    pub fn favorites(&self) -> &[QuestId] {
        &self.favorites
    }

    pub fn templates(&self) -> &[QuestTemplate] {
        &self.templates
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Replace the generated batch wholesale, select the first quest as
    /// current, and prepend the batch to the history.
    pub fn record_generated(&mut self, quests: Vec<Quest>) {
        self.current = quests.first().cloned();
        let mut history = quests.clone();
        history.append(&mut self.history);
        history.truncate(HISTORY_CAP);
        self.history = history;
        self.generated = quests;
    }

    pub fn clear_generated(&mut self) {
        self.generated.clear();
        self.current = None;
    }

    pub fn set_current(&mut self, quest: Option<Quest>) {
        self.current = quest;
    }

    pub fn set_params(&mut self, params: GenerationParams) {
        self.params = params;
    }

    /// Upsert into the saved collection: an existing quest with the same
    /// id is replaced in place, otherwise the quest is appended.
    pub fn save(&mut self, quest: Quest) {
        match self.saved.iter_mut().find(|q| q.id == quest.id) {
            Some(existing) => *existing = quest,
            None => self.saved.push(quest),
        }
    }

    /// Remove a saved quest. Its favorite mark and the current selection
    /// (when it points at the same id) are dropped too.
    pub fn delete(&mut self, id: QuestId) -> Option<Quest> {
        self.favorites.retain(|fav| *fav != id);
        if self.current.as_ref().is_some_and(|q| q.id == id) {
            self.current = None;
        }
        let position = self.saved.iter().position(|q| q.id == id)?;
        Some(self.saved.remove(position))
    }

    /// Copy `quest` into the saved collection under a fresh identity and
    /// select the copy as current.
    pub fn duplicate(&mut self, quest: &Quest) -> Quest {
        let copy = quest.duplicated();
        self.saved.push(copy.clone());
        self.current = Some(copy.clone());
        copy
    }

    pub fn add_favorite(&mut self, id: QuestId) {
        if !self.favorites.contains(&id) {
            self.favorites.push(id);
        }
    }

    pub fn remove_favorite(&mut self, id: QuestId) {
        self.favorites.retain(|fav| *fav != id);
    }

    pub fn is_favorite(&self, id: QuestId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn add_template(&mut self, template: QuestTemplate) {
        self.templates.push(template);
    }

    pub fn delete_template(&mut self, id: TemplateId) -> Option<QuestTemplate> {
        let position = self.templates.iter().position(|t| t.id == id)?;
        Some(self.templates.remove(position))
    }

    pub fn find_template(&self, id: TemplateId) -> Option<&QuestTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Look a quest up across collections: saved first, then history,
    /// then the generated batch.
    pub fn find_quest(&self, id: QuestId) -> Option<&Quest> {
        self.saved
            .iter()
            .find(|q| q.id == id)
            .or_else(|| self.history.iter().find(|q| q.id == id))
            .or_else(|| self.generated.iter().find(|q| q.id == id))
    }

    /// Merge quests into the saved collection, skipping ids that are
    /// already saved. Returns how many were added.
    pub fn import(&mut self, quests: Vec<Quest>) -> usize {
        let mut added = 0;
        for quest in quests {
            if self.saved.iter().any(|q| q.id == quest.id) {
                continue;
            }
            self.saved.push(quest);
            added += 1;
        }
        added
    }

    /// Empty every collection. Generation parameters are kept.
    pub fn clear_all(&mut self) {
        self.generated.clear();
        self.current = None;
        self.saved.clear();
        self.history.clear();
        self.favorites.clear();
        self.templates.clear();
    }
}

/// The durable slice of the library, shaped for the storage namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedLibrary {
    pub saved_quests: Vec<Quest>,
    pub quest_history: Vec<Quest>,
    pub favorites: Vec<QuestId>,
    pub templates: Vec<QuestTemplate>,
    pub generation_params: GenerationParams,
}

impl Default for PersistedLibrary {
    fn default() -> Self {
        Self {
            saved_quests: Vec::new(),
            quest_history: Vec::new(),
            favorites: Vec::new(),
            templates: Vec::new(),
            // Freshly seeded libraries generate with both extras enabled.
            generation_params: GenerationParams::default()
                .with_complications(true)
                .with_secondary_objectives(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::entities::QuestDetails;
    use crate::domain::value_objects::{Constraint, Difficulty, QuestLength, QuestType};

    fn sample_quest(title: &str) -> Quest {
        Quest {
            id: QuestId::new(),
            title: title.to_string(),
            difficulty: Difficulty::Medium,
            length: QuestLength::Short,
            description: "New lands await discovery.".to_string(),
            primary_objective: format!("Explore and map the {}", title),
            secondary_objectives: None,
            is_advanced: false,
            main_element: title.to_string(),
            rewards: Vec::new(),
            complications: Vec::new(),
            estimated_duration: "1-2 hours".to_string(),
            created_at: Utc::now(),
            details: QuestDetails::Exploration {
                location: title.to_string(),
            },
        }
    }

    #[test]
    fn record_generated_selects_first_and_prepends_history() {
        let mut library = QuestLibrary::new();
        let first = sample_quest("Crystal Caverns");
        let second = sample_quest("Darkwood Forest");

        library.record_generated(vec![first.clone(), second.clone()]);
        library.record_generated(vec![sample_quest("Frostpeak Mountains")]);

        assert_eq!(library.generated().len(), 1);
        assert_eq!(library.current().map(|q| &q.title).unwrap(), "Frostpeak Mountains");
        assert_eq!(library.history().len(), 3);
        assert_eq!(library.history()[0].title, "Frostpeak Mountains");
        assert_eq!(library.history()[1].id, first.id);
        assert_eq!(library.history()[2].id, second.id);
    }

    #[test]
    fn history_is_capped_at_one_hundred() {
        let mut library = QuestLibrary::new();
        for i in 0..(HISTORY_CAP + 20) {
            library.record_generated(vec![sample_quest(&format!("Location {}", i))]);
        }

        assert_eq!(library.history().len(), HISTORY_CAP);
        // Newest stays, oldest was evicted.
        assert_eq!(
            library.history()[0].title,
            format!("Location {}", HISTORY_CAP + 19)
        );
    }

    #[test]
    fn clear_generated_drops_batch_and_selection_but_not_history() {
        let mut library = QuestLibrary::new();
        library.record_generated(vec![sample_quest("Crystal Caverns")]);

        library.clear_generated();

        assert!(library.generated().is_empty());
        assert!(library.current().is_none());
        assert_eq!(library.history().len(), 1);
    }

    #[test]
    fn save_upserts_by_id() {
        let mut library = QuestLibrary::new();
        let mut quest = sample_quest("Crystal Caverns");
        library.save(quest.clone());

        quest.title = "Crystal Caverns, revisited".to_string();
        library.save(quest.clone());

        assert_eq!(library.saved().len(), 1);
        assert_eq!(library.saved()[0].title, "Crystal Caverns, revisited");
    }

    #[test]
    fn delete_drops_favorite_mark_and_current_selection() {
        let mut library = QuestLibrary::new();
        let quest = sample_quest("Crystal Caverns");
        library.save(quest.clone());
        library.add_favorite(quest.id);
        library.set_current(Some(quest.clone()));

        let removed = library.delete(quest.id);

        assert!(removed.is_some());
        assert!(library.saved().is_empty());
        assert!(!library.is_favorite(quest.id));
        assert!(library.current().is_none());
    }

    #[test]
    fn delete_of_unknown_id_is_a_no_op() {
        let mut library = QuestLibrary::new();
        library.save(sample_quest("Crystal Caverns"));

        assert!(library.delete(QuestId::new()).is_none());
        assert_eq!(library.saved().len(), 1);
    }

    #[test]
    fn duplicate_saves_a_fresh_copy_and_selects_it() {
        let mut library = QuestLibrary::new();
        let quest = sample_quest("Crystal Caverns");
        library.save(quest.clone());

        let copy = library.duplicate(&quest);

        assert_ne!(copy.id, quest.id);
        assert_eq!(library.saved().len(), 2);
        assert_eq!(library.current().map(|q| q.id), Some(copy.id));
        assert_eq!(copy.title, "Crystal Caverns (Copy)");
    }

    #[test]
    fn favorites_are_idempotent() {
        let mut library = QuestLibrary::new();
        let id = QuestId::new();

        library.add_favorite(id);
        library.add_favorite(id);
        assert_eq!(library.favorites().len(), 1);

        library.remove_favorite(id);
        library.remove_favorite(id);
        assert!(library.favorites().is_empty());
    }

    #[test]
    fn find_quest_prefers_saved_over_history_over_generated() {
        let mut library = QuestLibrary::new();
        let generated = sample_quest("Darkwood Forest");
        library.record_generated(vec![generated.clone()]);
        // The same generation is now in both history and the batch.
        assert_eq!(library.find_quest(generated.id).map(|q| q.id), Some(generated.id));

        let saved = sample_quest("Crystal Caverns");
        library.save(saved.clone());
        assert_eq!(library.find_quest(saved.id).map(|q| q.id), Some(saved.id));
        assert!(library.find_quest(QuestId::new()).is_none());
    }

    #[test]
    fn import_skips_quests_already_saved() {
        let mut library = QuestLibrary::new();
        let existing = sample_quest("Crystal Caverns");
        library.save(existing.clone());

        let incoming = vec![existing.clone(), sample_quest("Darkwood Forest")];
        let added = library.import(incoming);

        assert_eq!(added, 1);
        assert_eq!(library.saved().len(), 2);
    }

    #[test]
    fn clear_all_keeps_generation_params() {
        let mut library = QuestLibrary::new();
        let params = GenerationParams::default().with_quest_type(QuestType::Rescue);
        library.set_params(params.clone());
        library.save(sample_quest("Crystal Caverns"));
        library.record_generated(vec![sample_quest("Darkwood Forest")]);

        library.clear_all();

        assert!(library.saved().is_empty());
        assert!(library.history().is_empty());
        assert!(library.generated().is_empty());
        assert!(library.current().is_none());
        assert_eq!(library.params(), &params);
    }

    #[test]
    fn persisted_subset_excludes_session_state() {
        let mut library = QuestLibrary::new();
        library.record_generated(vec![sample_quest("Darkwood Forest")]);
        library.save(sample_quest("Crystal Caverns"));

        let persisted = library.to_persisted();
        assert_eq!(persisted.saved_quests.len(), 1);
        assert_eq!(persisted.quest_history.len(), 1);

        let restored = QuestLibrary::from_persisted(persisted);
        assert!(restored.generated().is_empty());
        assert!(restored.current().is_none());
        assert_eq!(restored.saved().len(), 1);
    }

    #[test]
    fn empty_persisted_document_rehydrates_with_seeded_params() {
        let persisted: PersistedLibrary = serde_json::from_str("{}").unwrap();
        let library = QuestLibrary::from_persisted(persisted);

        assert!(library.params().include_complications);
        assert!(library.params().include_secondary_objectives);
        assert_eq!(library.params().quest_type, Constraint::Random);
    }

    #[test]
    fn persisted_library_uses_storage_key_names() {
        let persisted = QuestLibrary::new().to_persisted();
        let json = serde_json::to_value(&persisted).unwrap();

        assert!(json.get("savedQuests").is_some());
        assert!(json.get("questHistory").is_some());
        assert!(json.get("favorites").is_some());
        assert!(json.get("templates").is_some());
        assert!(json.get("generationParams").is_some());
    }
}
