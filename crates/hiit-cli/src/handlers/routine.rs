use crate::cli::RoutineAction;
use crate::context::{CliContext, RoutineView};
use crate::output;
use hiit_domain::commands::Applied;

pub fn handle(ctx: &mut CliContext, action: RoutineAction) -> anyhow::Result<()> {
    match action {
        RoutineAction::Create { name } => {
            let routine = ctx.editor.create_routine(name)?;
            output::output_success(RoutineView::new(routine))?;
        }
        RoutineAction::List => {
            let routines: Vec<RoutineView> =
                ctx.editor.routines().iter().map(RoutineView::new).collect();
            output::output_list(routines)?;
        }
        RoutineAction::Get { id } => match ctx.editor.routine(&id) {
            Some(routine) => output::output_success(RoutineView::new(routine))?,
            None => output::output_error(&format!("Routine not found: {}", id)),
        },
        RoutineAction::Rename { id, name } => {
            let routine = ctx.editor.rename_routine(&id, name)?;
            output::output_success(RoutineView::new(routine))?;
        }
        RoutineAction::Delete { id } => {
            ctx.editor.delete_routine(&id)?;
            output::output_success(serde_json::json!({ "deleted": id }))?;
        }
        RoutineAction::Move { id, to } => {
            let applied = ctx.editor.move_routine(&id, &to)?;
            let order: Vec<&str> = ctx
                .editor
                .routines()
                .iter()
                .map(|routine| routine.id.as_str())
                .collect();
            output::output_success(serde_json::json!({
                "moved": applied == Applied::Changed,
                "order": order,
            }))?;
        }
    }
    Ok(())
}
