use std::fs::File;
use std::sync::Arc;

use simplelog::{LevelFilter, WriteLogger};
use tapdom::to_markup;
use tapform::prelude::*;
use tapform::redraw;

fn toppings(form: &Form, config: &Config, redraw: &RedrawSender) -> Vec<(Arc<Item>, Checkbox)> {
    [("Pepperoni", true, false), ("Sausage", false, true), ("Mushrooms", false, false)]
        .into_iter()
        .map(|(name, checked, disabled)| {
            let item = Arc::new(Item::with_label(form));
            let cb = Checkbox::builder()
                .form(form.clone())
                .config(config)
                .item(item.clone())
                .checked(checked)
                .disabled(disabled)
                .redraw(redraw.clone())
                .build();
            cb.register_on_change(move |v| log::info!("{name} -> {v}"));
            cb.after_content_init();
            (item, cb)
        })
        .collect()
}

#[tokio::main]
async fn main() {
    let log_file = File::create("tapform-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = match std::env::args().nth(1) {
        Some(mode) => match mode.parse::<Mode>() {
            Ok(mode) => Config::new(mode),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        },
        None => Config::default(),
    };

    let form = Form::new();
    let (redraw_tx, mut redraw_rx) = redraw::channel();
    let rows = toppings(&form, &config, &redraw_tx);

    let render = |rows: &[(Arc<Item>, Checkbox)]| {
        Element::new("ion-list").children(
            rows.iter()
                .map(|(item, cb)| item.render(cb.render()))
                .collect(),
        )
    };

    // Click every row once; the disabled row ignores it.
    for (_, cb) in &rows {
        let mut ev = DomEvent::new(Event::click(cb.id()));
        cb.handle_event(&mut ev);
    }

    let page = render(&rows);
    let mut focus = FocusState::new();
    if let Some((_, first)) = rows.first() {
        first.init_focus(&page, &mut focus);
    }

    // Wait for the first redraw, then collapse the rest into one render.
    if redraw_rx.recv().await.is_some() {
        let pending = redraw_rx.drain();
        log::debug!("rendering after {} redraw requests", pending + 1);
        println!("{}", to_markup(&render(&rows)));
    }

    match form.require_checked("Pick every topping") {
        ValidationResult::Valid => println!("all toppings selected"),
        ValidationResult::Invalid(errors) => {
            for e in errors {
                println!("{}: {}", e.input_id, e.message);
            }
        }
    }

    for (_, cb) in &rows {
        cb.destroy();
    }
}
