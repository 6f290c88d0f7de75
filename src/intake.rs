use crate::dom;
use crate::status::DomPresenter;
use crate::viewer::ObjectUrlSource;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{CandidateFile, FileIntakeController, IntakeOutcome, StatusPresenter};
use web_sys as web;

pub type WebIntake = FileIntakeController<ObjectUrlSource, Rc<DomPresenter>>;

pub fn candidate_from_file(file: web::File) -> CandidateFile<web::File> {
    CandidateFile {
        name: file.name(),
        size: file.size().max(0.0) as u64,
        media_type: file.type_(),
        bytes: file,
    }
}

/// Only the first entry of a selection or drop is considered.
#[inline]
pub fn first_file(files: Option<web::FileList>) -> Option<web::File> {
    files.and_then(|list| list.get(0))
}

pub fn all_files(files: Option<web::FileList>) -> Vec<web::File> {
    files
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}

pub fn submit_file(intake: &RefCell<WebIntake>, file: Option<web::File>) -> IntakeOutcome {
    intake.borrow_mut().submit(file.map(candidate_from_file))
}

pub fn wire_file_input(input: &web::HtmlInputElement, intake: Rc<RefCell<WebIntake>>) {
    let input_for_change = input.clone();
    dom::listen(input, "change", move |_: web::Event| {
        let file = first_file(input_for_change.files());
        if submit_file(&intake, file) != IntakeOutcome::Empty {
            // Allow re-selecting the same file later.
            input_for_change.set_value("");
        }
    });
}

pub fn wire_upload_label(label: &web::Element, input: web::HtmlInputElement) {
    dom::listen(label, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        input.click();
    });
}

pub fn wire_error_close(close: &web::Element, presenter: Rc<DomPresenter>) {
    dom::listen(close, "click", move |_: web::MouseEvent| presenter.hide_error());
}
