use crate::contacts::delete_contact::{DeleteContactImpl, DeleteContactInteractor};
use crate::contacts::download_contact::{DownloadContactImpl, DownloadContactInteractor};
use crate::contacts::get_contact::{GetContactImpl, GetContactInteractor};
use crate::contacts::list_contacts::{ListContactsImpl, ListContactsInteractor};
use crate::contacts::submit_contact::{SubmitContactImpl, SubmitContactInteractor};
use crate::contacts::{ContactsRepo, DocumentRenderer, Notifier};
use std::sync::Arc;

pub mod actor;
pub mod contacts;

pub trait App: Send + Sync {
    fn submit_contact(&self) -> &dyn SubmitContactInteractor;
    fn list_contacts(&self) -> &dyn ListContactsInteractor;
    fn get_contact(&self) -> &dyn GetContactInteractor;
    fn download_contact(&self) -> &dyn DownloadContactInteractor;
    fn delete_contact(&self) -> &dyn DeleteContactInteractor;
}

pub struct AppImpl {
    submit_contact: Arc<dyn SubmitContactInteractor>,
    list_contacts: Arc<dyn ListContactsInteractor>,
    get_contact: Arc<dyn GetContactInteractor>,
    download_contact: Arc<dyn DownloadContactInteractor>,
    delete_contact: Arc<dyn DeleteContactInteractor>,
}

impl App for AppImpl {
    fn submit_contact(&self) -> &dyn SubmitContactInteractor {
        self.submit_contact.as_ref()
    }

    fn list_contacts(&self) -> &dyn ListContactsInteractor {
        self.list_contacts.as_ref()
    }

    fn get_contact(&self) -> &dyn GetContactInteractor {
        self.get_contact.as_ref()
    }

    fn download_contact(&self) -> &dyn DownloadContactInteractor {
        self.download_contact.as_ref()
    }

    fn delete_contact(&self) -> &dyn DeleteContactInteractor {
        self.delete_contact.as_ref()
    }
}

impl AppImpl {
    pub fn new<R: ContactsRepo + 'static>(
        repo: R,
        renderer: Arc<dyn DocumentRenderer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let repository: Arc<dyn ContactsRepo> = Arc::new(repo);

        Self {
            submit_contact: Arc::new(SubmitContactImpl::new(
                repository.clone(),
                renderer.clone(),
                notifier,
            )),
            list_contacts: Arc::new(ListContactsImpl::new(repository.clone())),
            get_contact: Arc::new(GetContactImpl::new(repository.clone())),
            download_contact: Arc::new(DownloadContactImpl::new(repository.clone(), renderer)),
            delete_contact: Arc::new(DeleteContactImpl::new(repository)),
        }
    }
}
