//! Domain events emitted after every mutation.
//!
//! Every successful create/update/delete publishes a [`DomainEvent`] on the
//! in-process [`EventBus`]. Consumers (currently the audit logger task in
//! the server binary) subscribe to the bus; publishing never fails, even
//! with no subscribers attached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Default capacity of the event broadcast channel.
const EVENT_BUS_CAPACITY: usize = 256;

/// The entity a domain event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    /// A course.
    Course,
    /// A course category.
    Category,
    /// A lesson within a course.
    Lesson,
    /// A student's enrollment in a course.
    Enrollment,
    /// A payment for a course.
    Payment,
    /// A course review.
    Review,
    /// A course tag.
    Tag,
    /// A course-to-tag relation row.
    TagRelation,
    /// A completion certificate.
    Certificate,
    /// A lesson-completion progress log entry.
    ProgressLog,
    /// A downloadable course resource.
    Resource,
}

impl Entity {
    /// The database table name, also used as the event name prefix.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Course => "courses",
            Self::Category => "course_categories",
            Self::Lesson => "lessons",
            Self::Enrollment => "enrollments",
            Self::Payment => "payments",
            Self::Review => "reviews",
            Self::Tag => "course_tags",
            Self::TagRelation => "course_tag_relations",
            Self::Certificate => "course_certificates",
            Self::ProgressLog => "course_progress_logs",
            Self::Resource => "course_resources",
        }
    }
}

/// The mutation that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    /// A row was created.
    Create,
    /// A row was updated.
    Update,
    /// A row was soft-deleted.
    Delete,
}

impl EventAction {
    /// The action suffix used in event names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A domain event with metadata, published after a successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The entity the event refers to.
    pub entity: Entity,
    /// The mutation that occurred.
    pub action: EventAction,
    /// The primary key of the affected row.
    pub entity_id: i64,
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(entity: Entity, action: EventAction, entity_id: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            entity,
            action,
            entity_id,
        }
    }

    /// The conventional event name, e.g. `lessons.create`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.entity.table(), self.action.as_str())
    }
}

/// In-process publish/subscribe bus for domain events.
///
/// Backed by a tokio broadcast channel. Cloning is cheap; all clones share
/// the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUS_CAPACITY);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// A bus with no subscribers silently drops the event.
    pub fn publish(&self, event: DomainEvent) {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::debug!(event = %name, receivers, "Domain event published");
            }
            Err(_) => {
                tracing::trace!(event = %name, "Domain event dropped (no subscribers)");
            }
        }
    }

    /// Subscribe to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name_convention() {
        let event = DomainEvent::new(Entity::Lesson, EventAction::Create, 7);
        assert_eq!(event.name(), "lessons.create");

        let event = DomainEvent::new(Entity::ProgressLog, EventAction::Delete, 3);
        assert_eq!(event.name(), "course_progress_logs.delete");
    }

    #[test]
    fn test_publish_without_subscribers_does_not_panic() {
        let bus = EventBus::new();
        bus.publish(DomainEvent::new(Entity::Course, EventAction::Update, 1));
    }

    #[tokio::test]
    async fn test_subscriber_receives_published_event() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.publish(DomainEvent::new(Entity::Payment, EventAction::Create, 42));

        let received = rx.recv().await.expect("should receive event");
        assert_eq!(received.entity_id, 42);
        assert_eq!(received.name(), "payments.create");
    }
}
