use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::adapters::file_document::FileDocument;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::decision::Decision;
use crate::enums::output_format::OutputFormat;
use crate::enums::review_stage::ReviewStage;
use crate::errors::{ReviewError, ReviewResult};
use crate::logger::change_logger::ChangeLogger;
use crate::services::contract_review::ContractReview;
use crate::services::diff_engine::DiffEngine;
use crate::services::merge_applier::MergeApplier;
use crate::structs::config::config::Config;
use crate::structs::review_summary::ReviewSummary;
use crate::traits::document_source::DocumentSource;
use crate::ui::diff_server::DiffServer;
use crate::ui::session_manager::SessionManager;

pub struct CommandRunner {
    config: Config,
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ReviewResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Diff { original, modified, format } => self.diff_command(&original, &modified, format),
            Commands::Merge { original, modified, approve, reject, decisions, approve_all, reject_rest, output } => {
                let selection = DecisionSelection { approve, reject, decisions, approve_all, reject_rest };
                self.merge_command(&original, &modified, &selection, output.as_deref())
            }
            Commands::Review { original, modified, output, port, no_browser } => {
                self.review_command(&original, &modified, output.as_deref(), port, no_browser).await
            }
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> ReviewResult<()> {
        log::info!("🚀 Initializing contract-review configuration...");
        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        println!("✅ Configuration written to {}", path.display());
        println!("🔧 Run 'contract-review validate' to check it.");
        Ok(())
    }

    fn validate_command(&self) -> ReviewResult<()> {
        match ConfigManager::validate_config(&self.config) {
            Ok(()) => {
                println!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    println!("   ❌ {}", error);
                }
                Err(ReviewError::config_error(
                    &format!("{} configuration problem(s)", errors.len()),
                    None,
                    Some("Fix the values listed above"),
                ))
            }
        }
    }

    fn diff_command(&self, original: &Path, modified: &Path, format: Option<OutputFormat>) -> ReviewResult<()> {
        let original_text = FileDocument::new(original).get_content()?;
        let modified_text = FileDocument::new(modified).get_content()?;

        let changes = DiffEngine::default().compute_changes(&original_text, &modified_text);

        match format.unwrap_or(self.config.output.format) {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&changes)?),
            OutputFormat::Text => {
                ChangeLogger::new(self.config.output.color).print_changes(&changes);
                ReviewSummary::from_changes(&changes).print_summary();
            }
        }
        Ok(())
    }

    fn merge_command(&self, original: &Path, modified: &Path, selection: &DecisionSelection, output: Option<&Path>) -> ReviewResult<()> {
        let mut review = self.new_review();
        review.save_initial(&FileDocument::new(original))?;
        let change_count = review.save_edits(&FileDocument::new(modified))?.len();
        log::info!("🔍 {} changes between {} and {}", change_count, original.display(), modified.display());

        for (change_id, decision) in selection.resolve()? {
            review.decide(&change_id, decision)?;
        }
        if selection.approve_all {
            review.decide_all_pending(Decision::Approve)?;
        } else if selection.reject_rest {
            review.decide_all_pending(Decision::Reject)?;
        }

        let summary = review.summary();
        summary.print_compact_summary();
        if !summary.is_fully_reviewed() {
            log::warn!("⚠️ {} changes still pending; pass --approve-all or --reject-rest to decide them", summary.pending_count);
        }
        review.complete_review()?;
        self.emit_result(&review, output)
    }

    async fn review_command(&self, original: &Path, modified: &Path, output: Option<&Path>, port: Option<u16>, no_browser: bool) -> ReviewResult<()> {
        let original_text = FileDocument::new(original).get_content()?;
        let modified_text = FileDocument::new(modified).get_content()?;

        let manager = SessionManager::new(DiffEngine::default(), MergeApplier::from_config(&self.config.merge));
        let mut server = DiffServer::new(manager, self.config.server.clone());
        server.start(port).await?;

        let session_id = server.session_manager().create_session(
            &original.display().to_string(),
            &original_text,
            &modified.display().to_string(),
            &modified_text,
        )?;
        let url = server
            .review_url(&session_id)
            .ok_or_else(|| ReviewError::system_error("review", "server has no port"))?;

        println!("🌐 Review the changes at {}", url);
        if self.config.server.open_browser && !no_browser {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }

        let outcome = server.wait_for_completion(&session_id).await;
        let finished = server.session_manager().get_session(&session_id);
        server.shutdown().await?;

        match (outcome?, finished) {
            (Some(_), Some(session)) => self.emit_result(&session.review, output),
            (Some(_), None) => Err(ReviewError::SessionNotFound { session_id }),
            (None, _) => {
                println!("⏭️ Review cancelled; no document written.");
                Ok(())
            }
        }
    }

    fn emit_result(&self, review: &ContractReview, output: Option<&Path>) -> ReviewResult<()> {
        let outcome = review
            .outcome()
            .ok_or_else(|| ReviewError::stage_error("emit result", ReviewStage::Complete, review.stage()))?;
        ChangeLogger::new(self.config.output.color).print_merge_report(outcome);

        match output {
            Some(path) => review.publish(&mut FileDocument::new(path))?,
            None => println!("{}", outcome.text),
        }
        Ok(())
    }

    fn new_review(&self) -> ContractReview {
        ContractReview::new(DiffEngine::default(), MergeApplier::from_config(&self.config.merge))
    }
}

/// Reviewer decisions gathered from command-line flags and a decisions file.
#[derive(Debug, Default)]
pub struct DecisionSelection {
    pub approve: Vec<String>,
    pub reject: Vec<String>,
    pub decisions: Option<PathBuf>,
    pub approve_all: bool,
    pub reject_rest: bool,
}

impl DecisionSelection {
    /// Explicit decisions in a stable order. A change named twice is an
    /// error here rather than a second transition later.
    pub fn resolve(&self) -> ReviewResult<BTreeMap<String, Decision>> {
        let mut resolved: BTreeMap<String, Decision> = match &self.decisions {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => BTreeMap::new(),
        };

        let flagged = self.approve.iter().map(|id| (id, Decision::Approve))
            .chain(self.reject.iter().map(|id| (id, Decision::Reject)));

        for (change_id, decision) in flagged {
            if let Some(previous) = resolved.insert(change_id.clone(), decision) {
                return Err(ReviewError::config_error(
                    &format!("'{}' was given more than one decision ({:?} and {:?})", change_id, previous, decision),
                    Some(change_id.as_str()),
                    Some("Decide each change once"),
                ));
            }
        }

        Ok(resolved)
    }
}
