use anyhow::Result;
use mxl_message_service::{
    console::ConsoleMessageService, MessageButton, MessageImage, MessageOptions, MessageResult, MessageService,
};
use std::{
    io::Cursor,
    sync::{Arc, Mutex},
};

mod common;

use common::init::init;

fn console(input: &str) -> ConsoleMessageService<Cursor<Vec<u8>>, Vec<u8>> {
    ConsoleMessageService::<Cursor<Vec<u8>>, Vec<u8>>::builder().build(Cursor::new(input.as_bytes().to_vec()), vec![])
}

fn output(service: ConsoleMessageService<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let (_, writer) = service.into_inner();
    String::from_utf8_lossy(&writer).into_owned()
}

fn yes_no_question() -> MessageOptions {
    MessageOptions::new(MessageButton::YesNo, MessageImage::Question)
}

#[test]
fn yes_answer_confirms() -> Result<()> {
    init();
    let service = console("y\n");

    let result = service.show("Delete file?", "Confirm", yes_no_question())?;

    assert_eq!(result, MessageResult::Yes);
    assert_eq!(output(service), "[question] Confirm\nDelete file?\n[Y]es / [N]o: ");
    Ok(())
}

#[test]
fn full_labels_are_accepted_case_insensitive() -> Result<()> {
    init();
    let options = MessageOptions::new(MessageButton::YesNoCancel, MessageImage::None);

    assert_eq!(console("NO\n").show("Save?", "Close", options)?, MessageResult::No);
    assert_eq!(console("  Cancel \n").show("Save?", "Close", options)?, MessageResult::Cancel);
    assert_eq!(console("yes").show("Save?", "Close", options)?, MessageResult::Yes);
    Ok(())
}

#[test]
fn unknown_answer_prompts_again() -> Result<()> {
    init();
    let service = console("maybe\no\n");
    let options = MessageOptions::new(MessageButton::OkCancel, MessageImage::Warning);

    let result = service.show("Replace existing file?", "Export", options)?;

    assert_eq!(result, MessageResult::Ok);
    assert_eq!(
        output(service),
        "[warning] Export\nReplace existing file?\n[O]K / [C]ancel: [O]K / [C]ancel: "
    );
    Ok(())
}

#[test]
fn answer_not_offered_by_button_set_is_not_accepted() -> Result<()> {
    init();
    let service = console("ok\nn\n");

    assert_eq!(service.show("Delete file?", "Confirm", yes_no_question())?, MessageResult::No);
    Ok(())
}

#[test]
fn exhausted_attempts_dismiss_the_message() -> Result<()> {
    init();
    let service = ConsoleMessageService::<Cursor<Vec<u8>>, Vec<u8>>::builder()
        .max_attempts(2)
        .build(Cursor::new(b"a\nb\ny\n".to_vec()), vec![]);

    assert_eq!(service.show("Delete file?", "Confirm", yes_no_question())?, MessageResult::No);
    assert_eq!(
        output(service),
        "[question] Confirm\nDelete file?\n[Y]es / [N]o: [Y]es / [N]o: \n"
    );
    Ok(())
}

#[test]
fn end_of_input_dismisses_the_message() -> Result<()> {
    init();
    let options = MessageOptions::new(MessageButton::YesNoCancel, MessageImage::Question);

    let service = console("");
    assert_eq!(service.show("Save changes?", "Close", options)?, MessageResult::Cancel);
    assert!(output(service).ends_with("[Y]es / [N]o / [C]ancel: \n"));
    assert_eq!(console("").show("Delete file?", "Confirm", yes_no_question())?, MessageResult::No);
    Ok(())
}

#[test]
fn acknowledge_only_waits_for_enter() -> Result<()> {
    init();
    let service = console("\n");

    service.show_information("Export finished", "Export", None)?;

    assert_eq!(
        output(service),
        "[info] Export\nExport finished\nPress Enter to continue "
    );
    Ok(())
}

#[test]
fn error_without_callback_completes() -> Result<()> {
    init();
    let service = console("\n");

    service.show_error("Disk full", "Error", None)?;

    assert!(output(service).starts_with("[error] Error\nDisk full\n"));
    Ok(())
}

#[test]
fn async_show_delivers_result_to_callback() -> Result<()> {
    init();
    let service = console("n\n");
    let results = Arc::new(Mutex::new(vec![]));
    let callback_results = Arc::clone(&results);

    service.show_async(
        "Delete file?",
        "Confirm",
        yes_no_question(),
        Some(Box::new(move |result| {
            callback_results.lock().unwrap().push(result);
        })),
    )?;

    assert_eq!(*results.lock().unwrap(), vec![MessageResult::No]);
    Ok(())
}

#[test]
fn prompt_disabled_only_prints() -> Result<()> {
    init();
    let service = ConsoleMessageService::<Cursor<Vec<u8>>, Vec<u8>>::builder()
        .prompt(false)
        .build(Cursor::new(b"y\n".to_vec()), vec![]);

    assert_eq!(service.show("Delete file?", "Confirm", yes_no_question())?, MessageResult::No);
    assert_eq!(output(service), "[question] Confirm\nDelete file?\n");
    Ok(())
}

#[test]
fn blank_text_is_rejected_before_anything_is_printed() {
    init();
    let service = console("y\n");

    let error = service.show(" ", "Confirm", yes_no_question()).unwrap_err();

    assert!(error.is_invalid_argument());
    assert!(output(service).is_empty());
}
