use crate::diff::Side;
use crate::file::{FileData, load_into};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

pub enum LoaderMessage {
    /// Ask the user for a file with a dialog, then load it
    Pick(Side),
    /// Load a known path, e.g. one given on the command line
    Open(Side, PathBuf),
}

pub enum LoaderResponse {
    Loaded(Result<FileData, String>),
    /// The dialog was closed without picking a file
    Cancelled,
}

/// Background worker that reads files so the UI thread never blocks on IO
/// or a modal dialog
pub struct Loader {
    receiver: Receiver<LoaderMessage>,
    response_sender: Sender<LoaderResponse>,
}

impl Loader {
    pub fn new(receiver: Receiver<LoaderMessage>, response_sender: Sender<LoaderResponse>) -> Self {
        Self {
            receiver,
            response_sender,
        }
    }

    pub fn run(&self) {
        while let Ok(message) = self.receiver.recv() {
            let picked = match message {
                LoaderMessage::Open(side, path) => Some((side, path)),
                LoaderMessage::Pick(side) => rfd::FileDialog::new()
                    .set_title(format!("Open {}", side.label()))
                    .pick_file()
                    .map(|path| (side, path)),
            };

            let response = match picked {
                Some((side, path)) => {
                    let result = load_into(side, path).map_err(|e| e.to_string());
                    if let Err(e) = &result {
                        tracing::warn!("Failed to load file: {}", e);
                    }
                    LoaderResponse::Loaded(result)
                }
                None => LoaderResponse::Cancelled,
            };
            if self.response_sender.send(response).is_err() {
                break;
            }
        }
    }
}

pub fn spawn_loader() -> (Sender<LoaderMessage>, Receiver<LoaderResponse>) {
    let (sender, receiver) = std::sync::mpsc::channel();
    let (response_sender, response_receiver) = std::sync::mpsc::channel();
    thread::spawn(move || {
        let loader = Loader::new(receiver, response_sender);
        loader.run();
    });
    (sender, response_receiver)
}
