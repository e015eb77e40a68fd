use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;
use crate::adapters::content_store_adapter::ContentStoreAdapter;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::FIELD_REF_SEPARATOR;
use crate::enums::call_outcome::CallOutcome;
use crate::enums::commands::Commands;
use crate::enums::guard_rejection::GuardRejection;
use crate::enums::workflow_action::WorkflowAction;
use crate::errors::{ReplaceError, ReplaceResult};
use crate::logger::notice_logger::LogNotifier;
use crate::logger::progress_spinner::ProgressSpinner;
use crate::logger::workflow_logger::WorkflowLogger;
use crate::services::session_handle::SessionHandle;
use crate::services::workflow_session::WorkflowSession;
use crate::structs::config::config::Config;
use crate::traits::content_gateway::ContentGateway;

/// A `--include`/`--exclude` argument: a whole entry or one field of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    pub entry_id: String,
    pub field_name: Option<String>,
}

impl FieldRef {
    pub fn parse(input: &str) -> ReplaceResult<Self> {
        let invalid = || ReplaceError::user_input_error(
            input,
            "`entry` or `entry:field`",
            "Use the entry id shown in the preview, e.g. --exclude 42:title",
        );

        let (entry_id, field_name) = match input.split_once(FIELD_REF_SEPARATOR) {
            Some((entry, field)) => (entry.trim(), Some(field.trim())),
            None => (input.trim(), None),
        };

        if entry_id.is_empty() || field_name.is_some_and(str::is_empty) {
            return Err(invalid());
        }

        Ok(Self {
            entry_id: entry_id.to_string(),
            field_name: field_name.map(str::to_string),
        })
    }
}

pub struct CommandRunner {
    base_url_override: Option<String>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(base_url_override: Option<String>) -> Self {
        Self {
            base_url_override,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ReplaceResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Categories => self.categories_command().await,
            Commands::Entries { category } => self.entries_command(&category).await,
            Commands::Scan { category, search, entries } => self.scan_command(category, &search, entries).await,
            Commands::Run { category, search, replace, entries, smart, include, exclude, yes } => {
                self.run_workflow_command(category, &search, &replace, entries, smart, &include, &exclude, yes).await
            }
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> ReplaceResult<()> {
        log::info!("🚀 Initializing bulk-replace configuration...");

        let path = ConfigManager::default_path()?;
        ConfigManager::create_sample_config(&path)?;

        log::info!("📝 Edit the configuration file to point at your content store.");
        log::info!("🔧 Run 'bulk-replace validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> ReplaceResult<()> {
        log::info!("🔍 Validating bulk-replace configuration...");

        let config = self.load_config()?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("🌐 Content store: {}", config.gateway.base_url);
                Ok(())
            }
            Err(issues) => {
                log::info!("❌ Issues found:");
                for issue in &issues {
                    log::info!("   - {}", issue);
                }
                Err(ReplaceError::config_error(
                    &format!("{} configuration issues", issues.len()),
                    Some("Fix the issues above and run 'bulk-replace validate' again"),
                ))
            }
        }
    }

    async fn categories_command(&self) -> ReplaceResult<()> {
        let (handle, _) = self.open_session()?;

        let spinner = ProgressSpinner::start("📚 Loading categories");
        let result = handle.load_categories().await;
        spinner.stop().await;
        Self::require_applied(WorkflowAction::LoadCategories, result)?;

        let session = handle.snapshot().await;
        WorkflowLogger::print_categories(session.categories());
        Ok(())
    }

    async fn entries_command(&self, category: &str) -> ReplaceResult<()> {
        let (handle, _) = self.open_session()?;
        handle.update(|s| s.select_category(category)).await;
        self.load_entries(&handle).await?;

        let session = handle.snapshot().await;
        WorkflowLogger::print_entries(category, session.entries());
        Ok(())
    }

    async fn scan_command(&self, category: Option<String>, search: &str, entries: Vec<String>) -> ReplaceResult<()> {
        let (handle, config) = self.open_session()?;
        let category = Self::resolve_category(category, &config)?;
        self.prepare_selection(&handle, &category, entries).await?;
        handle.update(|s| s.set_search(search)).await;

        self.run_scan(&handle).await?;
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    async fn run_workflow_command(
        &self,
        category: Option<String>,
        search: &str,
        replace: &str,
        entries: Vec<String>,
        smart: bool,
        include: &[String],
        exclude: &[String],
        yes: bool,
    ) -> ReplaceResult<()> {
        let include = include.iter().map(|s| FieldRef::parse(s)).collect::<ReplaceResult<Vec<_>>>()?;
        let exclude = exclude.iter().map(|s| FieldRef::parse(s)).collect::<ReplaceResult<Vec<_>>>()?;

        let (handle, config) = self.open_session()?;
        let category = Self::resolve_category(category, &config)?;
        self.prepare_selection(&handle, &category, entries).await?;

        let smart_mode = smart || config.workflow.smart_mode;
        handle
            .update(|s| {
                s.set_search(search);
                s.set_replacement(replace);
                s.set_smart_mode(smart_mode);
            })
            .await;

        if !self.run_scan(&handle).await? {
            return Ok(());
        }

        let spinner = ProgressSpinner::start("📝 Generating preview");
        let result = handle.preview().await;
        spinner.stop().await;
        Self::require_applied(WorkflowAction::Preview, result)?;

        handle
            .update(|s| {
                for field_ref in &include {
                    Self::apply_override(s, field_ref, true)?;
                }
                for field_ref in &exclude {
                    Self::apply_override(s, field_ref, false)?;
                }
                Ok::<_, ReplaceError>(())
            })
            .await?;

        let session = handle.snapshot().await;
        WorkflowLogger::print_preview(&session);

        let selected = session.commit_payload().len();
        if selected > 0 && !yes && !Self::confirm(&format!("Apply {} changes?", selected))? {
            log::info!("⏭️ Nothing applied.");
            return Ok(());
        }

        let spinner = ProgressSpinner::start("💾 Applying changes");
        let result = handle.apply().await;
        spinner.stop().await;
        if !Self::require_applied(WorkflowAction::Apply, result)? {
            return Ok(());
        }

        if let Some(report) = handle.snapshot().await.apply_report() {
            WorkflowLogger::print_apply_report(&report);
        }
        Ok(())
    }

    /// Returns `false` when the scan found nothing.
    async fn run_scan(&self, handle: &SessionHandle) -> ReplaceResult<bool> {
        let spinner = ProgressSpinner::start("🔍 Scanning entries");
        let result = handle.scan().await;
        spinner.stop().await;
        Self::require_applied(WorkflowAction::Scan, result)?;

        let session = handle.snapshot().await;
        let groups = session.match_groups();
        let total = session.scan_response().map_or(0, |scan| scan.total_matches);
        WorkflowLogger::print_match_groups(total, &groups);

        if groups.is_empty() {
            log::info!("⚠️ No matches found for '{}'.", session.search());
            return Ok(false);
        }
        Ok(true)
    }

    async fn prepare_selection(&self, handle: &SessionHandle, category: &str, entries: Vec<String>) -> ReplaceResult<()> {
        handle.update(|s| s.select_category(category)).await;

        if entries.is_empty() {
            self.load_entries(handle).await?;
            handle.update(|s| s.select_all_entries(true)).await;
        } else {
            handle.update(|s| s.set_selected_entries(entries)).await;
        }
        Ok(())
    }

    async fn load_entries(&self, handle: &SessionHandle) -> ReplaceResult<()> {
        let spinner = ProgressSpinner::start("🗂️ Loading entries");
        let result = handle.load_entries().await;
        spinner.stop().await;
        Self::require_applied(WorkflowAction::LoadEntries, result)?;
        Ok(())
    }

    fn apply_override(session: &mut WorkflowSession, field_ref: &FieldRef, selected: bool) -> ReplaceResult<()> {
        let matched = match &field_ref.field_name {
            Some(field) => session.toggle_field(&field_ref.entry_id, field, selected),
            None => session.select_all_for_entry(&field_ref.entry_id, selected),
        };
        if matched {
            return Ok(());
        }

        let input = match &field_ref.field_name {
            Some(field) => format!("{}{}{}", field_ref.entry_id, FIELD_REF_SEPARATOR, field),
            None => field_ref.entry_id.clone(),
        };
        Err(ReplaceError::user_input_error(
            &input,
            "an entry or field from the preview",
            "Check the ids printed in the preview above",
        ))
    }

    fn open_session(&self) -> ReplaceResult<(SessionHandle, Config)> {
        let config = self.load_config()?;
        if let Err(issues) = ConfigManager::validate_config(&config) {
            return Err(ReplaceError::config_error(
                &issues.join("; "),
                Some("Run 'bulk-replace validate' for details"),
            ));
        }

        let gateway: Arc<dyn ContentGateway> = Arc::new(ContentStoreAdapter::from_config(&config.gateway));
        let handle = SessionHandle::new(gateway, Arc::new(LogNotifier));
        Ok((handle, config))
    }

    fn load_config(&self) -> ReplaceResult<Config> {
        let mut config = ConfigManager::load()?;
        if let Some(base_url) = &self.base_url_override {
            config.gateway.base_url = base_url.clone();
        }
        Ok(config)
    }

    fn resolve_category(category: Option<String>, config: &Config) -> ReplaceResult<String> {
        category
            .or_else(|| config.workflow.default_category.clone())
            .ok_or_else(|| ReplaceError::user_input_error(
                "",
                "a category id",
                "Pass --category or set workflow.default_category in the config",
            ))
    }

    /// Maps the outcome of a session action to a command result. `Ok(false)`
    /// means the action did not run but that is not an error.
    fn require_applied(action: WorkflowAction, result: Result<CallOutcome, GuardRejection>) -> ReplaceResult<bool> {
        match result {
            Ok(CallOutcome::Applied) => Ok(true),
            Ok(CallOutcome::Failed(error)) => Err(error),
            Ok(CallOutcome::Stale) => Ok(false),
            Err(GuardRejection::NothingSelected) => Ok(false),
            Err(rejection) => Err(ReplaceError::user_input_error(
                &action.to_string(),
                "a complete selection",
                &rejection.to_string(),
            )),
        }
    }

    fn confirm(question: &str) -> ReplaceResult<bool> {
        print!("\n{} [y/N]: ", question);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}
