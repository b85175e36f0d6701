use crate::cli::{ItemAction, ItemAddArgs, ItemUpdateArgs};
use crate::context::CliContext;
use crate::output;
use hiit_core::HiitError;
use hiit_domain::commands::{Applied, ItemUpdate};
use hiit_domain::{parse_duration, Item};

pub fn handle(ctx: &mut CliContext, action: ItemAction) -> anyhow::Result<()> {
    match action {
        ItemAction::Add(args) => handle_add(ctx, args)?,
        ItemAction::List { routine_id } => match ctx.editor.routine(&routine_id) {
            Some(routine) => output::output_list(routine.items.iter().collect::<Vec<&Item>>())?,
            None => output::output_error(&format!("Routine not found: {}", routine_id)),
        },
        ItemAction::Update(args) => handle_update(ctx, args)?,
        ItemAction::Delete { routine_id, id } => {
            ctx.editor.delete_item(&routine_id, &id)?;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
        ItemAction::Move { routine_id, id, to } => {
            let applied = ctx.editor.move_item(&routine_id, &id, &to)?;
            let order: Vec<&str> = ctx
                .editor
                .routine(&routine_id)
                .map(|routine| routine.items.iter().map(|item| item.id.as_str()).collect())
                .unwrap_or_default();
            output::output_success(serde_json::json!({
                "moved": applied == Applied::Changed,
                "order": order,
            }))?;
        }
    }
    Ok(())
}

fn handle_add(ctx: &mut CliContext, args: ItemAddArgs) -> anyhow::Result<()> {
    let mut item = Item::placeholder();
    if let Some(name) = args.name {
        item.rename(name);
    }
    if let Some(text) = args.duration.as_deref() {
        item.set_duration(parse_duration(text)? as i64);
    }
    item.set_flash(!args.no_flash);

    let item = ctx.editor.add_item(&args.routine_id, Some(item))?;
    output::output_success(item)
}

fn handle_update(ctx: &mut CliContext, args: ItemUpdateArgs) -> anyhow::Result<()> {
    let duration = match args.duration.as_deref() {
        Some(text) => Some(parse_duration(text)? as i64),
        None => None,
    };
    let update = ItemUpdate {
        name: args.name,
        duration,
        flash: args.flash,
    };
    if update.is_empty() {
        return Err(HiitError::Validation(
            "nothing to update: pass --name, --duration or --flash".to_string(),
        )
        .into());
    }
    let item = ctx.editor.update_item(&args.routine_id, &args.id, update)?;
    output::output_success(item)
}
