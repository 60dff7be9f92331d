//! Command-line surface for the quest library.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::application::services::LibraryService;
use crate::domain::content;
use crate::domain::entities::{Quest, QuestTemplate};
use crate::domain::value_objects::{
    Constraint, Difficulty, GenerationParams, QuestId, QuestLength, QuestType, TemplateId,
};
use crate::infrastructure::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "questforge")]
#[command(about = "Generate procedural quests for tabletop RPG campaigns")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one or more quests
    Generate {
        /// Number of quests to generate (1-10)
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Quest type, e.g. "Kill Quest" or "random"
        #[arg(short = 't', long)]
        quest_type: Option<String>,

        /// Difficulty, e.g. "Hard" or "random"
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Quest length, e.g. "Campaign" or "random"
        #[arg(short, long)]
        length: Option<String>,

        /// Generate without complications
        #[arg(long)]
        no_complications: bool,

        /// Generate without secondary objectives
        #[arg(long)]
        no_secondary: bool,

        /// Save the generated quests to the library
        #[arg(short, long)]
        save: bool,
    },

    /// List quests in a library collection
    List {
        /// Which collection to list
        #[arg(value_enum, default_value = "saved")]
        collection: Collection,
    },

    /// Show a single quest in full
    Show {
        /// Quest id
        id: String,
    },

    /// Save a generated quest to the library
    Save {
        /// Quest id
        id: String,
    },

    /// Delete a saved quest
    Delete {
        /// Quest id
        id: String,
    },

    /// Duplicate a quest into the saved collection
    Duplicate {
        /// Quest id
        id: String,
    },

    /// Toggle a quest's favorite mark
    Favorite {
        /// Quest id
        id: String,
    },

    /// Save a quest's shape as a reusable template
    Template {
        /// Quest id to capture
        id: String,

        /// Template name
        name: String,

        /// Template description
        #[arg(default_value = "")]
        description: String,
    },

    /// Generate a quest from a saved template
    FromTemplate {
        /// Template id
        id: String,
    },

    /// Export saved quests as JSON
    Export {
        /// Quest ids to export (defaults to every saved quest)
        ids: Vec<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Import quests from a JSON export
    Import {
        /// Path to the export file
        file: std::path::PathBuf,
    },

    /// Clear library collections
    Clear {
        /// What to clear
        #[arg(value_enum)]
        target: ClearTarget,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Collection {
    Generated,
    Saved,
    History,
    Favorites,
    Templates,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ClearTarget {
    History,
    All,
}

pub async fn run(state: AppState, cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            count,
            quest_type,
            difficulty,
            length,
            no_complications,
            no_secondary,
            save,
        } => {
            let count = count.clamp(1, 10);
            let params = GenerationParams {
                quest_type: parse_option(quest_type.as_deref(), parse_quest_type)?,
                difficulty: parse_option(difficulty.as_deref(), parse_difficulty)?,
                length: parse_option(length.as_deref(), parse_length)?,
                include_complications: !no_complications,
                include_secondary_objectives: !no_secondary,
                ..GenerationParams::default()
            };
            let quests = state.library.generate_quests(count, Some(params)).await?;
            for quest in &quests {
                print_quest(quest);
                println!();
            }
            if save {
                let saved = quests.len();
                for quest in quests {
                    state.library.save_quest(quest).await?;
                }
                println!("Saved {} quest(s) to the library.", saved);
            }
        }
        Command::List { collection } => match collection {
            Collection::Generated => {
                print_quest_lines(&state, &state.library.generated_quests().await).await;
            }
            Collection::Saved => {
                print_quest_lines(&state, &state.library.saved_quests().await).await;
            }
            Collection::History => {
                print_quest_lines(&state, &state.library.quest_history().await).await;
            }
            Collection::Favorites => {
                let favorites = state.library.favorites().await;
                if favorites.is_empty() {
                    println!("No favorites.");
                }
                for id in favorites {
                    match state.library.find_quest(id).await {
                        Some(quest) => print_quest_line(&quest, true),
                        None => println!("  {}  (quest no longer in the library)", id),
                    }
                }
            }
            Collection::Templates => {
                let templates = state.library.templates().await;
                if templates.is_empty() {
                    println!("No templates.");
                }
                for template in templates {
                    print_template_line(&template);
                }
            }
        },
        Command::Show { id } => {
            let id = parse_quest_id(&id)?;
            let quest = state
                .library
                .find_quest(id)
                .await
                .ok_or_else(|| anyhow::anyhow!("Quest {} not found", id))?;
            print_quest(&quest);
        }
        Command::Save { id } => {
            let id = parse_quest_id(&id)?;
            let quest = state
                .library
                .find_quest(id)
                .await
                .ok_or_else(|| anyhow::anyhow!("Quest {} not found", id))?;
            let title = quest.title.clone();
            state.library.save_quest(quest).await?;
            println!("Saved \"{}\".", title);
        }
        Command::Delete { id } => {
            let id = parse_quest_id(&id)?;
            match state.library.delete_quest(id).await? {
                Some(quest) => println!("Deleted \"{}\".", quest.title),
                None => anyhow::bail!("No saved quest with id {}", id),
            }
        }
        Command::Duplicate { id } => {
            let id = parse_quest_id(&id)?;
            match state.library.duplicate_quest(id).await? {
                Some(copy) => {
                    println!("Created \"{}\" ({}).", copy.title, copy.id);
                }
                None => anyhow::bail!("Quest {} not found", id),
            }
        }
        Command::Favorite { id } => {
            let id = parse_quest_id(&id)?;
            if state.library.find_quest(id).await.is_none() {
                anyhow::bail!("Quest {} not found", id);
            }
            if state.library.toggle_favorite(id).await? {
                println!("Marked {} as a favorite.", id);
            } else {
                println!("Removed {} from favorites.", id);
            }
        }
        Command::Template {
            id,
            name,
            description,
        } => {
            let id = parse_quest_id(&id)?;
            match state.library.save_template(id, name, description).await? {
                Some(template) => {
                    println!("Saved template \"{}\" ({}).", template.name, template.id);
                }
                None => anyhow::bail!("Quest {} not found", id),
            }
        }
        Command::FromTemplate { id } => {
            let id = parse_template_id(&id)?;
            match state.library.generate_from_template(id).await? {
                Some(quest) => print_quest(&quest),
                None => anyhow::bail!("Template {} not found", id),
            }
        }
        Command::Export { ids, output } => {
            let ids = ids
                .iter()
                .map(|raw| parse_quest_id(raw))
                .collect::<Result<Vec<_>>>()?;
            let selection = (!ids.is_empty()).then_some(ids);
            let payload = state.library.export_quests(selection.as_deref()).await?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, payload)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Exported to {}.", path.display());
                }
                None => println!("{}", payload),
            }
        }
        Command::Import { file } => {
            let payload = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let added = state.library.import_quests(&payload).await?;
            println!("Imported {} quest(s).", added);
        }
        Command::Clear { target } => match target {
            ClearTarget::History => {
                state.library.clear_history().await?;
                println!("Quest history cleared.");
            }
            ClearTarget::All => {
                state.library.clear_all().await?;
                println!("Library cleared.");
            }
        },
    }
    Ok(())
}

fn parse_option<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Result<Constraint<T>>,
) -> Result<Constraint<T>> {
    match value {
        Some(raw) => parse(raw),
        None => Ok(Constraint::Random),
    }
}

fn parse_quest_type(value: &str) -> Result<Constraint<QuestType>> {
    parse_constraint(value, &content::ALL_QUEST_TYPES, "quest type", |entry| {
        entry.display_name()
    })
}

fn parse_difficulty(value: &str) -> Result<Constraint<Difficulty>> {
    parse_constraint(value, &content::DIFFICULTIES, "difficulty", |entry| {
        entry.display_name()
    })
}

fn parse_length(value: &str) -> Result<Constraint<QuestLength>> {
    parse_constraint(value, &content::QUEST_LENGTHS, "length", |entry| {
        entry.display_name()
    })
}

fn parse_constraint<T: Copy>(
    value: &str,
    table: &[T],
    what: &str,
    name_of: impl Fn(T) -> &'static str,
) -> Result<Constraint<T>> {
    if value.eq_ignore_ascii_case("random") {
        return Ok(Constraint::Random);
    }
    table
        .iter()
        .copied()
        .find(|entry| name_of(*entry).eq_ignore_ascii_case(value))
        .map(Constraint::Fixed)
        .ok_or_else(|| {
            let known: Vec<&str> = table.iter().map(|entry| name_of(*entry)).collect();
            anyhow::anyhow!(
                "Unknown {}: {:?} (expected \"random\" or one of: {})",
                what,
                value,
                known.join(", ")
            )
        })
}

fn parse_quest_id(value: &str) -> Result<QuestId> {
    Uuid::parse_str(value)
        .map(QuestId::from_uuid)
        .with_context(|| format!("Invalid quest id: {}", value))
}

fn parse_template_id(value: &str) -> Result<TemplateId> {
    Uuid::parse_str(value)
        .map(TemplateId::from_uuid)
        .with_context(|| format!("Invalid template id: {}", value))
}

async fn print_quest_lines(state: &AppState, quests: &[Quest]) {
    if quests.is_empty() {
        println!("No quests.");
        return;
    }
    for quest in quests {
        let favorite = state.library.is_favorite(quest.id).await;
        print_quest_line(quest, favorite);
    }
}

fn print_quest_line(quest: &Quest, favorite: bool) {
    let marker = if favorite { "*" } else { " " };
    println!(
        "{} {}  {} [{} / {}]  {}",
        marker,
        quest.id,
        quest.title,
        quest.quest_type().display_name(),
        quest.difficulty.display_name(),
        quest.estimated_duration,
    );
}

fn print_template_line(template: &QuestTemplate) {
    println!(
        "  {}  {} [{} / {}]",
        template.id,
        template.name,
        template.quest_type.display_name(),
        template.snapshot.difficulty.display_name(),
    );
}

fn print_quest(quest: &Quest) {
    println!("{}", quest.title);
    println!(
        "  {} | {} | {} | {}",
        quest.quest_type().display_name(),
        quest.difficulty.display_name(),
        quest.length.display_name(),
        quest.estimated_duration,
    );
    println!();
    println!("  {}", quest.description);
    println!();
    println!("  Objective: {}", quest.primary_objective);
    if let Some(objectives) = &quest.secondary_objectives {
        for objective in objectives {
            println!("    - {}", objective);
        }
    }
    if !quest.complications.is_empty() {
        println!("  Complications:");
        for complication in &quest.complications {
            println!("    - {}", complication);
        }
    }
    if !quest.rewards.is_empty() {
        let rewards: Vec<&str> = quest
            .rewards
            .iter()
            .map(|reward| reward.display_name())
            .collect();
        println!("  Rewards: {}", rewards.join(", "));
    }
    println!("  Id: {}", quest.id);
}
