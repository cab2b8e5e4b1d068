use chrono::{DateTime, Utc};

use super::domain::{PostId, PostKind, SocialPost};

struct SeedPost {
    id: &'static str,
    username: &'static str,
    platform: &'static str,
    content: &'static str,
    engagement: u64,
    location: Option<&'static str>,
    profile_url: &'static str,
    timestamp: &'static str,
    post_kind: PostKind,
}

const SEED_POSTS: [SeedPost; 7] = [
    SeedPost {
        id: "1",
        username: "tech_guru_2024",
        platform: "Twitter",
        content: "Just launched my new AI startup! Looking for urgent investment and technical partners. Need to scale ASAP!",
        engagement: 1247,
        location: Some("San Francisco, CA"),
        profile_url: "https://twitter.com/tech_guru_2024",
        timestamp: "2024-01-15T14:30:00Z",
        post_kind: PostKind::Post,
    },
    SeedPost {
        id: "2",
        username: "marketing_pro",
        platform: "LinkedIn",
        content: "Interested in exploring new marketing automation tools for our team. Researching different options.",
        engagement: 834,
        location: Some("New York, NY"),
        profile_url: "https://linkedin.com/in/marketing-pro",
        timestamp: "2024-01-15T12:15:00Z",
        post_kind: PostKind::Comment,
    },
    SeedPost {
        id: "3",
        username: "data_scientist",
        platform: "Reddit",
        content: "Maybe looking into machine learning solutions someday. Not sure about timeline yet.",
        engagement: 2156,
        location: Some("London, UK"),
        profile_url: "https://reddit.com/u/data_scientist",
        timestamp: "2024-01-14T18:45:00Z",
        post_kind: PostKind::Post,
    },
    SeedPost {
        id: "4",
        username: "startup_founder",
        platform: "Twitter",
        content: "Hiring immediately! Need experienced developers for our fintech startup. Budget approved, ready to onboard!",
        engagement: 892,
        location: Some("Austin, TX"),
        profile_url: "https://twitter.com/startup_founder",
        timestamp: "2024-01-14T16:20:00Z",
        post_kind: PostKind::Post,
    },
    SeedPost {
        id: "5",
        username: "aditya_roy",
        platform: "Instagram",
        content: "Looking for Thailand packages for summer vacation with friends",
        engagement: 156,
        location: Some("Mumbai, India"),
        profile_url: "https://instagram.com/aditya_roy",
        timestamp: "2024-01-15T12:30:00Z",
        post_kind: PostKind::Post,
    },
    SeedPost {
        id: "6",
        username: "sarah_johnson",
        platform: "YouTube",
        content: "Subscribed to Thailand travel vlogs, commented on budget travel tips",
        engagement: 89,
        location: Some("London, UK"),
        profile_url: "https://youtube.com/@sarah_johnson",
        timestamp: "2024-01-15T10:30:00Z",
        post_kind: PostKind::Comment,
    },
    SeedPost {
        id: "7",
        username: "mike_chen",
        platform: "Facebook",
        content: "Liked several posts about Asian destinations",
        engagement: 23,
        location: Some("Sydney, Australia"),
        profile_url: "https://facebook.com/mike.chen",
        timestamp: "2024-01-15T08:30:00Z",
        post_kind: PostKind::Comment,
    },
];

/// Posts shown on the dashboard when no dataset is configured.
pub fn sample_posts() -> Vec<SocialPost> {
    SEED_POSTS
        .iter()
        .map(|seed| SocialPost {
            id: PostId(seed.id.to_string()),
            username: seed.username.to_string(),
            platform: seed.platform.to_string(),
            content: seed.content.to_string(),
            engagement_count: seed.engagement,
            location: seed.location.map(str::to_string),
            profile_url: seed.profile_url.to_string(),
            timestamp: DateTime::parse_from_rfc3339(seed.timestamp)
                .map(|timestamp| timestamp.with_timezone(&Utc))
                .unwrap_or_default(),
            post_kind: seed.post_kind,
        })
        .collect()
}
