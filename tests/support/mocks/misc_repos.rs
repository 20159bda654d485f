// tests/support/mocks/misc_repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clinic_cms::domain::comment::{Comment, CommentId, CommentRepository, CommentUpdate, NewComment};
use clinic_cms::domain::errors::{DomainError, DomainResult};
use clinic_cms::domain::faq::{Faq, FaqContent, FaqId, FaqRepository};
use clinic_cms::domain::media::{Media, MediaId, MediaRepository, NewMedia};
use clinic_cms::domain::message::{
    ContactMessage, ContactMessageRepository, MessageId, NewContactMessage,
};
use clinic_cms::domain::settings::{SettingsRepository, SiteSettings, SiteSettingsUpdate};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// 新しい順（作成日時の降順）に並べ替える。同時刻なら後から追加した方を先にする。
fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut items: Vec<T> = items.iter().rev().cloned().collect();
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

/* -------------------------------- FAQ -------------------------------- */

#[derive(Default)]
pub struct InMemoryFaqs {
    faqs: Mutex<Vec<Faq>>,
}

#[async_trait]
impl FaqRepository for InMemoryFaqs {
    async fn insert(&self, content: FaqContent, now: DateTime<Utc>) -> DomainResult<Faq> {
        let faq = Faq {
            id: FaqId::generate(),
            question: content.question().to_string(),
            answer: content.answer().to_string(),
            created_at: now,
            updated_at: now,
        };
        self.faqs.lock().unwrap().push(faq.clone());
        Ok(faq)
    }

    async fn update(&self, id: FaqId, content: FaqContent, now: DateTime<Utc>) -> DomainResult<Faq> {
        let mut faqs = self.faqs.lock().unwrap();
        let faq = faqs
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| DomainError::NotFound("faq not found".into()))?;
        faq.question = content.question().to_string();
        faq.answer = content.answer().to_string();
        faq.updated_at = now;
        Ok(faq.clone())
    }

    async fn delete(&self, id: FaqId) -> DomainResult<()> {
        self.faqs.lock().unwrap().retain(|f| f.id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: FaqId) -> DomainResult<Option<Faq>> {
        Ok(self.faqs.lock().unwrap().iter().find(|f| f.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Faq>> {
        Ok(newest_first(&self.faqs.lock().unwrap(), |f| f.created_at))
    }
}

/* -------------------------------- Comments -------------------------------- */

#[derive(Default)]
pub struct InMemoryComments {
    comments: Mutex<Vec<Comment>>,
}

fn apply_comment_update(update: &CommentUpdate, comment: &mut Comment) {
    if let Some(initials) = &update.initials {
        comment.initials = initials.clone();
    }
    if let Some(rating) = update.rating {
        comment.rating = rating;
    }
    if let Some(content) = &update.content {
        comment.content = content.clone();
    }
    if let Some(is_active) = update.is_active {
        comment.is_active = is_active;
    }
    comment.updated_at = update.updated_at;
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let created = Comment {
            id: CommentId::generate(),
            initials: comment.initials,
            rating: comment.rating,
            content: comment.content,
            is_active: comment.is_active,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        self.comments.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        apply_comment_update(&update, comment);
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        self.comments.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list(&self, include_hidden: bool) -> DomainResult<Vec<Comment>> {
        let mut comments = newest_first(&self.comments.lock().unwrap(), |c| c.created_at);
        comments.retain(|c| include_hidden || c.is_active);
        Ok(comments)
    }
}

/* -------------------------------- Contact messages -------------------------------- */

#[derive(Default)]
pub struct InMemoryContactMessages {
    messages: Mutex<Vec<ContactMessage>>,
}

impl InMemoryContactMessages {
    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessages {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let created = ContactMessage {
            id: MessageId::generate(),
            name: message.name,
            email: message.email,
            phone: message.phone,
            message: message.message,
            created_at: message.created_at,
        };
        self.messages.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> DomainResult<Vec<ContactMessage>> {
        Ok(newest_first(&self.messages.lock().unwrap(), |m| m.created_at))
    }
}

/* -------------------------------- Settings -------------------------------- */

#[derive(Default)]
pub struct InMemorySettings {
    row: Mutex<Option<SiteSettings>>,
}

impl InMemorySettings {
    pub fn exists(&self) -> bool {
        self.row.lock().unwrap().is_some()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettings {
    async fn get_or_create(&self, now: DateTime<Utc>) -> DomainResult<SiteSettings> {
        let mut row = self.row.lock().unwrap();
        Ok(row
            .get_or_insert_with(|| SiteSettings {
                profile_photo_url: None,
                hero_photo_url: None,
                updated_at: now,
            })
            .clone())
    }

    async fn update(&self, update: SiteSettingsUpdate, now: DateTime<Utc>) -> DomainResult<SiteSettings> {
        let mut row = self.row.lock().unwrap();
        let settings = row.get_or_insert_with(|| SiteSettings {
            profile_photo_url: None,
            hero_photo_url: None,
            updated_at: now,
        });
        if let Some(url) = update.profile_photo_url {
            settings.profile_photo_url = url;
        }
        if let Some(url) = update.hero_photo_url {
            settings.hero_photo_url = url;
        }
        settings.updated_at = now;
        Ok(settings.clone())
    }
}

/* -------------------------------- Media -------------------------------- */

#[derive(Default)]
pub struct InMemoryMedia {
    media: Mutex<Vec<Media>>,
    reject_inserts: AtomicBool,
}

impl InMemoryMedia {
    /// 以降の insert をデータベース障害として失敗させる
    pub fn reject_inserts(&self) {
        self.reject_inserts.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.media.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaRepository for InMemoryMedia {
    async fn insert(&self, media: NewMedia) -> DomainResult<Media> {
        if self.reject_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection reset".into()));
        }
        let created = Media {
            id: MediaId::generate(),
            filename: media.filename,
            original_name: media.original_name,
            mime_type: media.mime_type,
            size: media.size,
            path: media.path,
            url: media.url,
            created_at: media.created_at,
        };
        self.media.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: MediaId) -> DomainResult<Option<Media>> {
        Ok(self.media.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn delete(&self, id: MediaId) -> DomainResult<()> {
        self.media.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Media>> {
        Ok(newest_first(&self.media.lock().unwrap(), |m| m.created_at))
    }
}
