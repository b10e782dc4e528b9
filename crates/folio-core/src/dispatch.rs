use crate::command_registry::CommandId;
use crate::command_registry::CommandRegistry;
use crate::content;
use crate::content::Profile;
use crate::projects::ProjectCatalog;
use crate::state::UiTheme;
use crate::transcript::BlockId;
use crate::transcript::BlockKind;
use crate::transcript::OutputSink;

pub struct CommandContext<'a> {
    pub sink: &'a mut dyn OutputSink,
    pub theme: &'a mut UiTheme,
    pub profile: &'a Profile,
    pub catalog: &'a ProjectCatalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Rendered,
    Cleared,
    NotFound,
    /// A loading placeholder was appended; the caller owns the fetch.
    FetchRequested { placeholder: BlockId },
}

/// Runs one normalized command line against the registry.
pub fn dispatch(line: &str, ctx: &mut CommandContext<'_>) -> DispatchOutcome {
    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let Some(spec) = CommandRegistry::lookup(name) else {
        log::debug!("unknown command {line:?}");
        ctx.sink
            .append(BlockKind::Output, content::command_not_found(line));
        return DispatchOutcome::NotFound;
    };
    log::debug!("dispatching {:?} with {} arg(s)", spec.token, args.len());

    let segments = match spec.id {
        CommandId::Help => content::help_listing(),
        CommandId::About => content::about(ctx.profile),
        CommandId::Skills => content::skills(),
        CommandId::Projects => content::projects_list(ctx.catalog),
        CommandId::Project => {
            let arg = args.first().copied();
            match ctx.catalog.resolve(arg) {
                Some(record) => content::project_detail(record),
                None => content::project_not_found(arg),
            }
        }
        CommandId::Coding => content::coding(ctx.profile),
        CommandId::Resume => content::resume(),
        CommandId::Certificate => content::certificates(),
        CommandId::Contact => content::contact(ctx.profile),
        CommandId::ThemeUsage => content::theme_usage(),
        CommandId::SetTheme(theme) => {
            *ctx.theme = theme;
            content::theme_set(theme)
        }
        CommandId::Banner => content::banner(),
        CommandId::Github => {
            let placeholder = ctx
                .sink
                .append(BlockKind::Loading, content::fetching_repos());
            return DispatchOutcome::FetchRequested { placeholder };
        }
        CommandId::Clear => {
            ctx.sink.clear();
            return DispatchOutcome::Cleared;
        }
    };
    ctx.sink.append(BlockKind::Output, segments);
    DispatchOutcome::Rendered
}
