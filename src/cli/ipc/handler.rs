//! Request dispatch onto the clipboard service

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::warn;

use crate::application::ports::{PasteInjector, PersistenceStore, PickerView, SystemClipboard};
use crate::application::ClipboardService;

use super::protocol::{Request, Response};
use super::RequestHandler;

/// Serves IPC requests from a shared [`ClipboardService`]
pub struct ServiceHandler<C, P, S, V>
where
    C: SystemClipboard,
    P: PasteInjector + 'static,
    S: PersistenceStore,
    V: PickerView,
{
    service: Arc<ClipboardService<C, P, S, V>>,
}

impl<C, P, S, V> ServiceHandler<C, P, S, V>
where
    C: SystemClipboard,
    P: PasteInjector + 'static,
    S: PersistenceStore,
    V: PickerView,
{
    pub fn new(service: Arc<ClipboardService<C, P, S, V>>) -> Self {
        Self { service }
    }

    async fn respond(&self, request: Request) -> Response {
        let service = &self.service;
        match request {
            Request::GetHistory => Response::History {
                items: service.list().await,
            },
            Request::Copy { id } => match service.copy_by_id(id).await {
                Ok(_) => Response::Ok,
                Err(e) => {
                    warn!(id, error = %e, "restore failed");
                    Response::error(e.to_string())
                }
            },
            Request::Delete { id } => Response::History {
                items: service.delete_item(id).await,
            },
            Request::Clear => Response::History {
                items: service.clear_history().await,
            },
            Request::ShowPicker => {
                service.show_picker().await;
                Response::Ok
            }
            Request::HidePicker => {
                service.hide_picker();
                Response::Ok
            }
            Request::GetAutoPaste => Response::AutoPaste {
                enabled: service.auto_paste().await,
            },
            Request::SetAutoPaste { enabled } => Response::AutoPaste {
                enabled: service.set_auto_paste(enabled).await,
            },
            Request::Pause => {
                service.pause();
                Response::Ok
            }
            Request::Resume => {
                service.resume();
                Response::Ok
            }
            Request::Status => Response::Status(service.status().await),
            Request::Watch => Response::error("watch cannot be answered with a single response"),
        }
    }

    async fn watch(&self, responses: mpsc::Sender<Response>) {
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();

        let history_tx = events_tx.clone();
        let _history = self.service.subscribe_history(move |items| {
            let _ = history_tx.send(Response::History {
                items: items.to_vec(),
            });
        });
        let _feedback = self.service.subscribe_paste_feedback(move |feedback| {
            let _ = events_tx.send(Response::PasteFeedback(feedback.clone()));
        });

        let initial = Response::History {
            items: self.service.list().await,
        };
        if responses.send(initial).await.is_err() {
            return;
        }

        loop {
            tokio::select! {
                Some(event) = events_rx.recv() => {
                    if responses.send(event).await.is_err() {
                        break;
                    }
                }
                _ = responses.closed() => break,
            }
        }
    }
}

#[async_trait]
impl<C, P, S, V> RequestHandler for ServiceHandler<C, P, S, V>
where
    C: SystemClipboard + 'static,
    P: PasteInjector + 'static,
    S: PersistenceStore + 'static,
    V: PickerView + 'static,
{
    async fn handle(&self, request: Request, responses: mpsc::Sender<Response>) {
        if request == Request::Watch {
            self.watch(responses).await;
        } else {
            let _ = responses.send(self.respond(request).await).await;
        }
    }
}
