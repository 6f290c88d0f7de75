//! File intake: validation of a candidate file and hand-off of a loadable
//! reference to the viewer.
//!
//! The controller is generic over two seams so the browser front-end and the
//! host tests share the exact same sequencing:
//! - [`ModelSource`] mints, assigns and releases resource references.
//! - [`StatusPresenter`] owns loading/error visibility.

use crate::config::ViewerConfig;
use crate::constants::LOAD_FAILURE_MESSAGE;
use crate::drag::DragDepth;
use crate::format::format_file_size;
use crate::status::StatusPresenter;
use thiserror::Error;

/// A user-selected or dropped file that has not been validated yet.
#[derive(Clone, Debug)]
pub struct CandidateFile<B> {
    pub name: String,
    pub size: u64,
    /// Declared media type; browsers often leave this empty for model files.
    pub media_type: String,
    pub bytes: B,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("File size too large. Maximum allowed size is {}.", format_file_size(*.max_bytes))]
    TooLarge { size: u64, max_bytes: u64 },
    #[error("Invalid file type. Please upload a GLTF (.gltf) or GLB (.glb) file.")]
    UnsupportedType { name: String },
    #[error("{}", LOAD_FAILURE_MESSAGE)]
    ReferenceUnavailable(String),
}

/// Size first, then type. The type check passes when either the extension
/// or the declared media type is accepted.
pub fn validate_candidate<B>(
    candidate: &CandidateFile<B>,
    config: &ViewerConfig,
) -> Result<(), IntakeError> {
    if candidate.size > config.max_file_size {
        return Err(IntakeError::TooLarge {
            size: candidate.size,
            max_bytes: config.max_file_size,
        });
    }
    let lower = candidate.name.to_ascii_lowercase();
    let extension_ok = config
        .supported_extensions
        .iter()
        .any(|ext| lower.ends_with(ext.as_str()));
    let media_ok = config
        .supported_media_types
        .iter()
        .any(|t| *t == candidate.media_type);
    if extension_ok || media_ok {
        Ok(())
    } else {
        Err(IntakeError::UnsupportedType {
            name: candidate.name.clone(),
        })
    }
}

/// Creates, assigns and revokes loadable references to file bytes.
pub trait ModelSource {
    type Bytes;
    type Handle;

    fn create_reference(&self, bytes: &Self::Bytes) -> Result<Self::Handle, IntakeError>;
    fn assign_source(&self, handle: &Self::Handle);
    fn release_reference(&self, handle: Self::Handle);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Selection was cancelled; nothing changed.
    Empty,
    Rejected(IntakeError),
    Accepted,
}

pub struct FileIntakeController<S: ModelSource, P: StatusPresenter> {
    config: ViewerConfig,
    source: S,
    presenter: P,
    active: Option<S::Handle>,
}

impl<S: ModelSource, P: StatusPresenter> FileIntakeController<S, P> {
    pub fn new(config: ViewerConfig, source: S, presenter: P) -> Self {
        Self {
            config,
            source,
            presenter,
            active: None,
        }
    }

    pub fn active_reference(&self) -> Option<&S::Handle> {
        self.active.as_ref()
    }

    /// Entry point shared by the file picker and drag-and-drop.
    pub fn submit(&mut self, candidate: Option<CandidateFile<S::Bytes>>) -> IntakeOutcome {
        let Some(candidate) = candidate else {
            return IntakeOutcome::Empty;
        };
        log::info!(
            "[intake] file selected: {} ({})",
            candidate.name,
            format_file_size(candidate.size)
        );

        if let Err(err) = validate_candidate(&candidate, &self.config) {
            log::warn!("[intake] rejected {}: {:?}", candidate.name, err);
            self.presenter.show_error(&err.to_string());
            return IntakeOutcome::Rejected(err);
        }

        self.presenter.show_loading();
        self.presenter.hide_error();

        let handle = match self.source.create_reference(&candidate.bytes) {
            Ok(h) => h,
            Err(err) => {
                log::error!("[intake] could not create a reference for {}: {:?}", candidate.name, err);
                self.presenter.hide_loading();
                self.presenter.show_error(&err.to_string());
                return IntakeOutcome::Rejected(err);
            }
        };

        // New source goes in before the old reference is revoked.
        self.source.assign_source(&handle);
        if let Some(previous) = self.active.replace(handle) {
            self.source.release_reference(previous);
        }
        log::info!("[intake] loading model: {}", candidate.name);
        IntakeOutcome::Accepted
    }
}

/// Drop handling: the overlay is cleared whatever the payload, and only the
/// first dropped file goes through [`FileIntakeController::submit`].
pub fn route_drop<S: ModelSource, P: StatusPresenter>(
    depth: &mut DragDepth,
    intake: &mut FileIntakeController<S, P>,
    files: impl IntoIterator<Item = CandidateFile<S::Bytes>>,
) -> IntakeOutcome {
    depth.drop_reset();
    match files.into_iter().next() {
        Some(first) => {
            log::info!("[drag] file dropped: {}", first.name);
            intake.submit(Some(first))
        }
        None => {
            log::debug!("[drag] drop without files");
            IntakeOutcome::Empty
        }
    }
}
