use crate::cli::QueryArgs;
use crate::context::AppContext;
use crate::dispatcher::ResultItem;
use crate::error::AppResult;

pub fn run(ctx: &AppContext, args: QueryArgs) -> AppResult<()> {
    let mut dispatcher = ctx.dispatcher();
    let items = dispatcher.query(args.argument().as_deref());

    let lines = items
        .iter()
        .enumerate()
        .map(|(index, item)| format_item(index, item))
        .collect::<Vec<_>>();
    ctx.output.emit(&lines, &items)
}

fn format_item(index: usize, item: &ResultItem) -> String {
    if item.is_placeholder() {
        return format!("{} ({})", item.name, item.description);
    }
    format!("{}. {}\n   {}", index + 1, item.name, item.description)
}
