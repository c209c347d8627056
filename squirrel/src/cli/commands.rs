//! CLI command execution.
//!
//! Every command runs the analysis pipeline locally and prints the result.
//! Only the acknowledgement commands write anything.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing::debug;

use crate::analyzer::{categorize, Buckets, Depth, Pipeline};
use crate::claude::{find_project, prompts_for_project};
use crate::config::{claude_dir, default_config_path, parse_duration, Config};
use crate::git::GitCli;
use crate::models::ProjectSummary;
use crate::output::{render_json, render_project_detail, render_terminal};

use super::args::{Cli, Commands};
use super::skill::install_skill;

/// Prompts shown in the project detail view.
const DETAIL_PROMPTS: usize = 10;

/// Settings shared by every command.
struct RunContext {
    claude_dir: PathBuf,
    config_path: PathBuf,
    days: u32,
    json: bool,
    color: bool,
}

impl RunContext {
    fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            claude_dir: claude_dir()?,
            config_path: default_config_path()?,
            days: cli.days,
            json: cli.json,
            color: !cli.no_color && std::env::var_os("NO_COLOR").is_none(),
        })
    }

    fn pipeline(&self, depth: Depth) -> Pipeline {
        Pipeline::new(&self.claude_dir, self.days, depth)
    }

    fn load_config(&self) -> Result<Config> {
        Config::load(&self.config_path).context("Failed to load config")
    }

    fn projects(&self, depth: Depth) -> Result<Vec<ProjectSummary>> {
        self.pipeline(depth).run(&GitCli)
    }

    fn buckets(&self, depth: Depth) -> Result<Buckets> {
        let pipeline = self.pipeline(depth);
        let projects = pipeline.run(&GitCli)?;
        let config = self.load_config()?;
        Ok(categorize(projects, &config.at(pipeline.now)))
    }

    fn print_buckets(&self, buckets: &Buckets) -> Result<()> {
        if self.json {
            print!("{}", render_json(buckets)?);
        } else {
            print!("{}", render_terminal(buckets, self.color));
        }
        Ok(())
    }
}

// === Command Execution ===

pub fn execute(cli: Cli) -> Result<()> {
    let ctx = RunContext::from_cli(&cli)?;
    debug!(claude_dir = %ctx.claude_dir.display(), days = ctx.days, "starting");

    match cli.command {
        None => status(&ctx, cli.depth),
        Some(Commands::Status { shortcut }) => status(&ctx, shortcut.selected().unwrap_or(cli.depth)),
        Some(Commands::Stash) => stash(&ctx, cli.depth.max(Depth::Medium)),
        Some(Commands::Timeline) => timeline(&ctx, cli.depth),
        Some(Commands::Project { query }) => project_detail(&ctx, &query),
        Some(Commands::Ack { query, duration }) => ack(&ctx, &query, duration.as_deref()),
        Some(Commands::Unack { query }) => unack(&ctx, &query),
        Some(Commands::InstallSkill) => {
            let path = install_skill(&ctx.claude_dir)?;
            println!("Skill installed to {}", path.display());
            println!("You can now use /squirrel in any Claude Code session.");
            Ok(())
        }
    }
}

fn status(ctx: &RunContext, depth: Depth) -> Result<()> {
    let buckets = ctx.buckets(depth)?;
    ctx.print_buckets(&buckets)
}

fn stash(ctx: &RunContext, depth: Depth) -> Result<()> {
    let buckets = ctx.buckets(depth)?;
    ctx.print_buckets(&stash_view(buckets))
}

fn timeline(ctx: &RunContext, depth: Depth) -> Result<()> {
    let buckets = ctx.buckets(depth)?;
    ctx.print_buckets(&timeline_view(buckets))
}

/// Keep only what needs a decision: open work and acknowledged projects.
fn stash_view(buckets: Buckets) -> Buckets {
    Buckets {
        recent_activity: Vec::new(),
        sleeping: Vec::new(),
        ..buckets
    }
}

/// Merge every unacknowledged project into one list, newest first.
fn timeline_view(buckets: Buckets) -> Buckets {
    let mut all = buckets.open_work;
    all.extend(buckets.recent_activity);
    all.extend(buckets.sleeping);
    all.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));

    Buckets {
        recent_activity: all,
        ..Buckets::default()
    }
}

fn lookup<'a>(projects: &'a [ProjectSummary], query: &str) -> Result<&'a ProjectSummary> {
    match find_project(projects, query) {
        Some(p) => Ok(p),
        None => bail!("No project matching '{query}' found in the selected time window"),
    }
}

fn project_detail(ctx: &RunContext, query: &str) -> Result<()> {
    let pipeline = ctx.pipeline(Depth::Deep);
    let records = pipeline.load_history()?;
    let projects = pipeline.analyze(&records, &GitCli);

    let config = ctx.load_config()?;
    let found = lookup(&projects, query)?.path.clone();
    // scores are only assigned by categorization
    let project = flatten(categorize(projects, &config.at(pipeline.now)))
        .into_iter()
        .find(|p| p.path == found)
        .with_context(|| format!("Project {found} vanished during categorization"))?;

    if ctx.json {
        print!("{}", render_json(&project)?);
        return Ok(());
    }

    let prompts = prompts_for_project(&records, &project.path, DETAIL_PROMPTS);
    print!("{}", render_project_detail(&project, &prompts, ctx.color));
    Ok(())
}

fn flatten(buckets: Buckets) -> Vec<ProjectSummary> {
    let mut all = buckets.open_work;
    all.extend(buckets.recent_activity);
    all.extend(buckets.sleeping);
    all.extend(buckets.acknowledged);
    all
}

fn ack(ctx: &RunContext, query: &str, duration: Option<&str>) -> Result<()> {
    let now = Utc::now();
    let expires_at = match duration {
        Some(d) => Some(now + parse_duration(d)?),
        None => None,
    };

    let projects = ctx.projects(Depth::Quick)?;
    let path = lookup(&projects, query)?.path.clone();

    let mut config = ctx.load_config()?;
    config.ack(&path, expires_at, now);
    save(&config, &ctx.config_path)?;

    match expires_at {
        Some(until) => println!("Acknowledged {path} until {}", until.format("%Y-%m-%d")),
        None => println!("Acknowledged {path}"),
    }
    Ok(())
}

fn unack(ctx: &RunContext, query: &str) -> Result<()> {
    let mut config = ctx.load_config()?;
    let path = resolve_acked_path(ctx, &config, query);

    if config.unack(&path) {
        save(&config, &ctx.config_path)?;
        println!("Removed acknowledgement for {path}");
    } else {
        println!("{path} was not acknowledged");
    }
    Ok(())
}

/// Prefer an exact acknowledged path, then a lookup over recent projects.
fn resolve_acked_path(ctx: &RunContext, config: &Config, query: &str) -> String {
    if config.acknowledged.iter().any(|e| e.path == query) {
        return query.to_string();
    }

    match ctx.projects(Depth::Quick) {
        Ok(projects) => find_project(&projects, query).map_or_else(|| query.to_string(), |p| p.path.clone()),
        Err(e) => {
            debug!(error = %e, "history unavailable for unack lookup");
            query.to_string()
        }
    }
}

fn save(config: &Config, path: &Path) -> Result<()> {
    config
        .save(path)
        .with_context(|| format!("Failed to save config to {}", path.display()))
}
