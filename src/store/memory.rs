//! Seeded in-memory implementation of [`Backend`].
//!
//! Every call builds its dataset fresh and returns owned values, so no
//! shared mutable state ever crosses two calls. Moderation actions
//! return the updated record without persisting it anywhere; the seed is
//! the system of record.

use anyhow::Result;
use chrono::{SecondsFormat, Utc};

use super::Backend;
use crate::{
    model::{
        ActionResponse, AdminSummary, ApplicationStatus, ManagedUser, Opportunity,
        OpportunityDetail, OpportunityStatus, UserAction, UserDocuments, UserRole, UserStatus,
        VolunteerApplication,
    },
    query::{QueryParams, QueryResult, query},
};

/// The mock backend serving seeded fixture data.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore;

impl MemoryStore {
    pub fn new() -> Self {
        Self
    }
}

impl Backend for MemoryStore {
    fn opportunities(&self, params: &QueryParams) -> Result<QueryResult<Opportunity>> {
        let listings: Vec<Opportunity> = seed_opportunities()
            .into_iter()
            .map(|detail| detail.listing)
            .collect();
        Ok(query(listings, params))
    }

    fn opportunity(&self, id: &str) -> Result<Option<OpportunityDetail>> {
        Ok(seed_opportunities()
            .into_iter()
            .find(|detail| detail.listing.id == id))
    }

    fn users(&self, params: &QueryParams) -> Result<QueryResult<ManagedUser>> {
        Ok(query(seed_users(), params))
    }

    fn user(&self, id: &str) -> Result<Option<ManagedUser>> {
        Ok(seed_users().into_iter().find(|user| user.id == id))
    }

    fn apply_user_action(&self, id: &str, action: UserAction) -> Result<ActionResponse> {
        let Some(user) = self.user(id)? else {
            return Ok(ActionResponse {
                success: false,
                message: "User not found".to_string(),
                user: None,
            });
        };
        Ok(apply_action(user, action))
    }

    fn summary(&self) -> Result<AdminSummary> {
        Ok(AdminSummary {
            // Platform-wide counters are seeded; the fixture set is a
            // window into the data, not all of it.
            pending_volunteers: 15,
            active_volunteers: 243,
            pending_opportunities: 4,
            active_opportunities: 12,
            completed_opportunities: 87,
            total_volunteer_hours: 5238,
            recent_applications: seed_applications(),
        })
    }
}

/// Apply a moderation action to a copy of the record.
fn apply_action(user: ManagedUser, action: UserAction) -> ActionResponse {
    let mut updated = user;
    let message = match action {
        UserAction::Admit => {
            updated.status = UserStatus::Active;
            updated.national_id_verified = true;
            updated.last_active = Some(now_timestamp());
            "User admitted successfully"
        }
        UserAction::Revoke => {
            updated.status = UserStatus::Inactive;
            "User revoked successfully"
        }
        UserAction::Promote => {
            updated.role = UserRole::Admin;
            "User promoted successfully"
        }
        UserAction::Block => {
            updated.status = UserStatus::Blocked;
            "User blocked successfully"
        }
        UserAction::Delete => {
            return ActionResponse {
                success: true,
                message: "User deleted successfully".to_string(),
                user: None,
            };
        }
    };
    ActionResponse {
        success: true,
        message: message.to_string(),
        user: Some(updated),
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ============================================================
// Seed data
// ============================================================

fn seed_opportunities() -> Vec<OpportunityDetail> {
    vec![
        OpportunityDetail {
            listing: listing(
                "1",
                "Translation Services at Grand Mosque",
                "Help visitors by providing translation services at the Grand Mosque during Ramadan.",
                "/images/opportunity1.jpg",
                "Makkah",
                "2025-04-20",
                25,
                true,
                "Translation",
            ),
            long_description: "This program assists international visitors who speak neither \
                               Arabic nor English by providing translation services in multiple \
                               languages. Volunteers are stationed at key locations throughout \
                               the Grand Mosque to help with directions, explain rituals, and \
                               answer questions. Volunteers work in shifts with appropriate \
                               breaks; training is provided before the program starts."
                .to_string(),
            requirements: vec![
                "Fluency in Arabic and at least one other language".to_string(),
                "Previous experience in translation or interpretation is preferred".to_string(),
                "Strong communication skills".to_string(),
                "Ability to stand for extended periods".to_string(),
                "Minimum age of 18 years".to_string(),
            ],
            skills: vec![
                "Translation".to_string(),
                "Interpersonal Communication".to_string(),
                "Cultural Sensitivity".to_string(),
                "Problem Solving".to_string(),
            ],
            time_commitment: "4-6 hours per day, 3 days per week, for 2 weeks".to_string(),
            contact_person: "Abdullah Al-Faisal".to_string(),
            contact_email: "translation@haramainvolunteers.org".to_string(),
            address: "Grand Mosque, Makkah, Saudi Arabia".to_string(),
            status: OpportunityStatus::Open,
            application_deadline: "2025-04-30".to_string(),
        },
        OpportunityDetail {
            listing: listing(
                "2",
                "Visitor Guidance in Prophet's Mosque",
                "Assist visitors with directions and information at the Prophet's Mosque.",
                "/images/opportunity2.jpg",
                "Madinah",
                "2025-05-10",
                15,
                false,
                "Guidance",
            ),
            long_description: "Guides welcome visitors at the main gates, help them find prayer \
                               halls and facilities, and share practical information about \
                               visiting hours and etiquette."
                .to_string(),
            requirements: vec![
                "Good knowledge of the mosque layout".to_string(),
                "Conversational English or another visitor language".to_string(),
                "Minimum age of 18 years".to_string(),
            ],
            skills: vec![
                "Wayfinding".to_string(),
                "Interpersonal Communication".to_string(),
            ],
            time_commitment: "3 hours per shift, flexible scheduling".to_string(),
            contact_person: "Noura Al-Faisal".to_string(),
            contact_email: "guidance@haramainvolunteers.org".to_string(),
            address: "Prophet's Mosque, Madinah, Saudi Arabia".to_string(),
            status: OpportunityStatus::Open,
            application_deadline: "2025-05-01".to_string(),
        },
        OpportunityDetail {
            listing: listing(
                "3",
                "Elderly Assistance Program",
                "Provide support to elderly visitors during their visit to the Holy Mosques.",
                "/images/opportunity3.jpg",
                "Makkah",
                "2025-04-25",
                30,
                true,
                "Assistance",
            ),
            long_description: "Volunteers accompany elderly visitors, assist with wheelchairs, \
                               and coordinate with medical staff when needed. Patience and \
                               physical stamina matter more than prior experience."
                .to_string(),
            requirements: vec![
                "Comfortable assisting people with limited mobility".to_string(),
                "First-aid awareness is a plus".to_string(),
                "Minimum age of 18 years".to_string(),
            ],
            skills: vec!["Patience".to_string(), "Physical Stamina".to_string()],
            time_commitment: "4 hours per day, 5 days per week".to_string(),
            contact_person: "Saud Al-Qahtani".to_string(),
            contact_email: "assistance@haramainvolunteers.org".to_string(),
            address: "Grand Mosque, Makkah, Saudi Arabia".to_string(),
            status: OpportunityStatus::Open,
            application_deadline: "2025-04-18".to_string(),
        },
        OpportunityDetail {
            listing: listing(
                "4",
                "Water Distribution Team",
                "Join the team distributing Zamzam water to visitors at designated areas.",
                "/images/opportunity1.jpg",
                "Makkah",
                "2025-05-05",
                20,
                false,
                "Services",
            ),
            long_description: "Teams keep the water stations stocked and hand out cups during \
                               peak hours. Shifts rotate between stations inside and around the \
                               courtyard."
                .to_string(),
            requirements: vec![
                "Able to lift supply crates".to_string(),
                "Minimum age of 18 years".to_string(),
            ],
            skills: vec!["Teamwork".to_string()],
            time_commitment: "3 hours per shift".to_string(),
            contact_person: "Khalid Ibrahim".to_string(),
            contact_email: "services@haramainvolunteers.org".to_string(),
            address: "Grand Mosque, Makkah, Saudi Arabia".to_string(),
            status: OpportunityStatus::Open,
            application_deadline: "2025-04-28".to_string(),
        },
        OpportunityDetail {
            listing: listing(
                "5",
                "Educational Tours Guide",
                "Lead educational tours explaining the history and significance of the Holy Mosques.",
                "/images/opportunity2.jpg",
                "Madinah",
                "2025-05-15",
                10,
                true,
                "Education",
            ),
            long_description: "Guides lead small groups through the historical sites, covering \
                               the architecture and history of the mosque. A script and training \
                               session are provided; guides are encouraged to adapt it to their \
                               group."
                .to_string(),
            requirements: vec![
                "Strong public speaking skills".to_string(),
                "Interest in Islamic history".to_string(),
                "Minimum age of 21 years".to_string(),
            ],
            skills: vec![
                "Public Speaking".to_string(),
                "Storytelling".to_string(),
                "Cultural Sensitivity".to_string(),
            ],
            time_commitment: "2 tours per day, weekends only".to_string(),
            contact_person: "Aisha Rahman".to_string(),
            contact_email: "education@haramainvolunteers.org".to_string(),
            address: "Prophet's Mosque, Madinah, Saudi Arabia".to_string(),
            status: OpportunityStatus::Open,
            application_deadline: "2025-05-08".to_string(),
        },
        OpportunityDetail {
            listing: listing(
                "6",
                "Lost and Found Services",
                "Help manage the lost and found department, assisting visitors in recovering their belongings.",
                "/images/opportunity3.jpg",
                "Jeddah",
                "2025-04-30",
                12,
                false,
                "Services",
            ),
            long_description: "Volunteers register found items, match them against reports, and \
                               contact owners. Basic computer literacy is required for the \
                               registry system."
                .to_string(),
            requirements: vec![
                "Basic computer literacy".to_string(),
                "Attention to detail".to_string(),
                "Minimum age of 18 years".to_string(),
            ],
            skills: vec!["Organization".to_string(), "Record Keeping".to_string()],
            time_commitment: "6 hours per day, 2 days per week".to_string(),
            contact_person: "Mohammed Saleh".to_string(),
            contact_email: "lostfound@haramainvolunteers.org".to_string(),
            address: "Hajj Terminal, Jeddah, Saudi Arabia".to_string(),
            status: OpportunityStatus::Filled,
            application_deadline: "2025-04-22".to_string(),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    description: &str,
    image: &str,
    location: &str,
    date: &str,
    spots: u32,
    featured: bool,
    category: &str,
) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        location: location.to_string(),
        date: date.to_string(),
        spots,
        featured,
        category: category.to_string(),
    }
}

fn seed_users() -> Vec<ManagedUser> {
    vec![
        // Pending volunteers awaiting review.
        pending_user(
            "p1",
            "Ahmed Mohammed",
            "ahmed@example.com",
            "+966 50 123 4567",
            "2025-04-01T10:15:30Z",
        ),
        pending_user(
            "p2",
            "Fatima Ali",
            "fatima@example.com",
            "+966 55 987 6543",
            "2025-04-02T14:22:10Z",
        ),
        pending_user(
            "p3",
            "Omar Abdullah",
            "omar@example.com",
            "+966 50 555 7890",
            "2025-04-03T09:45:00Z",
        ),
        // Active volunteers.
        active_user(
            "a1",
            "Mohammed Saleh",
            "msaleh@example.com",
            "+966 50 111 2222",
            "2025-03-15T08:30:00Z",
            "2025-04-09T16:45:22Z",
            3,
            24,
        ),
        active_user(
            "a2",
            "Aisha Rahman",
            "aisha@example.com",
            "+966 55 333 4444",
            "2025-03-10T11:20:15Z",
            "2025-04-10T09:15:30Z",
            5,
            36,
        ),
        active_user(
            "a3",
            "Khalid Ibrahim",
            "khalid@example.com",
            "+966 50 777 8888",
            "2025-03-05T13:10:45Z",
            "2025-04-08T14:30:00Z",
            2,
            16,
        ),
        staff_user(
            "admin1",
            "Saud Al-Qahtani",
            "saud@haramainvolunteers.org",
            "+966 50 999 8888",
            UserRole::Admin,
            "2025-01-10T09:00:00Z",
            "2025-04-10T17:30:00Z",
        ),
        staff_user(
            "admin2",
            "Noura Al-Faisal",
            "noura@haramainvolunteers.org",
            "+966 55 444 3333",
            UserRole::Admin,
            "2025-01-15T10:15:30Z",
            "2025-04-09T16:20:00Z",
        ),
        staff_user(
            "super1",
            "Abdullah Al-Sheikh",
            "abdullah@haramainvolunteers.org",
            "+966 50 123 0000",
            UserRole::SuperAdmin,
            "2025-01-01T08:00:00Z",
            "2025-04-10T18:45:10Z",
        ),
    ]
}

fn pending_user(id: &str, name: &str, email: &str, phone: &str, joined_at: &str) -> ManagedUser {
    ManagedUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        status: UserStatus::Pending,
        role: UserRole::User,
        joined_at: joined_at.to_string(),
        last_active: None,
        completed_opportunities: None,
        total_hours: None,
        national_id_verified: false,
        notes: None,
        documents: Some(UserDocuments {
            national_id: Some(format!("/documents/{}/national-id.png", id)),
            selfie: Some(format!("/documents/{}/selfie.png", id)),
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn active_user(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    joined_at: &str,
    last_active: &str,
    completed: u32,
    hours: u32,
) -> ManagedUser {
    ManagedUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        status: UserStatus::Active,
        role: UserRole::User,
        joined_at: joined_at.to_string(),
        last_active: Some(last_active.to_string()),
        completed_opportunities: Some(completed),
        total_hours: Some(hours),
        national_id_verified: true,
        notes: None,
        documents: None,
    }
}

fn staff_user(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    role: UserRole,
    joined_at: &str,
    last_active: &str,
) -> ManagedUser {
    ManagedUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        status: UserStatus::Active,
        role,
        joined_at: joined_at.to_string(),
        last_active: Some(last_active.to_string()),
        completed_opportunities: None,
        total_hours: None,
        national_id_verified: true,
        notes: None,
        documents: None,
    }
}

fn seed_applications() -> Vec<VolunteerApplication> {
    vec![
        application(
            "1",
            "v1",
            "Ahmed Mohammed",
            "ahmed@example.com",
            Some("+966 50 123 4567"),
            "1",
            "Translation Services at Grand Mosque",
            "2025-04-10T16:00:00Z",
        ),
        application(
            "2",
            "v2",
            "Fatima Ali",
            "fatima@example.com",
            None,
            "2",
            "Visitor Guidance in Prophet's Mosque",
            "2025-04-10T13:00:00Z",
        ),
        application(
            "3",
            "v3",
            "Omar Abdullah",
            "omar@example.com",
            Some("+966 55 987 6543"),
            "3",
            "Elderly Assistance Program",
            "2025-04-10T06:00:00Z",
        ),
        application(
            "4",
            "v4",
            "Aisha Rahman",
            "aisha@example.com",
            None,
            "1",
            "Translation Services at Grand Mosque",
            "2025-04-10T00:00:00Z",
        ),
        application(
            "5",
            "v5",
            "Mohammed Saleh",
            "msaleh@example.com",
            None,
            "4",
            "Water Distribution Team",
            "2025-04-09T18:00:00Z",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn application(
    id: &str,
    volunteer_id: &str,
    name: &str,
    email: &str,
    phone: Option<&str>,
    opportunity_id: &str,
    opportunity_title: &str,
    applied_at: &str,
) -> VolunteerApplication {
    VolunteerApplication {
        id: id.to_string(),
        volunteer_id: volunteer_id.to_string(),
        volunteer_name: name.to_string(),
        volunteer_email: email.to_string(),
        volunteer_phone: phone.map(str::to_string),
        opportunity_id: opportunity_id.to_string(),
        opportunity_title: opportunity_title.to_string(),
        status: ApplicationStatus::Pending,
        applied_at: applied_at.to_string(),
        updated_at: None,
    }
}
