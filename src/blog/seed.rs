//! Sample posts loaded at start-up so the API is usable straight away.

use super::model::BlogRecord;

/// First id handed out after the samples.
pub const NEXT_ID_AFTER_SEED: u64 = 5;

#[allow(clippy::too_many_arguments)]
fn post(
    id: u64,
    image: &str,
    heading: &str,
    sub_heading: &str,
    description: &str,
    author: &str,
    author_image: &str,
    is_favorite: bool,
    created_at: &str,
) -> BlogRecord {
    BlogRecord {
        id,
        image: image.to_owned(),
        heading: heading.to_owned(),
        sub_heading: sub_heading.to_owned(),
        description: description.to_owned(),
        author: author.to_owned(),
        author_image: author_image.to_owned(),
        is_favorite,
        created_at: created_at.to_owned(),
    }
}

/// The four sample posts, ids 1 to 4.
pub fn sample_posts() -> Vec<BlogRecord> {
    vec![
        post(
            1,
            "https://images.unsplash.com/photo-1464983953574-0892a716854b?auto=format&fit=crop&w=400&q=80",
            "Angelique's Repose",
            "A peaceful moment in nature",
            "Angelique hides quietly in a shrub as bees and birds flit around her. A ladybug climbs up \
             her arm to rest on her shoulder, while butterflies dance around her head. This serene \
             moment captures the harmony between human and nature, showing how we can find peace in \
             the simplest of moments.",
            "Andrea Corwin",
            "https://randomuser.me/api/portraits/women/44.jpg",
            false,
            "3 days ago in Poets",
        ),
        post(
            2,
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=400&q=80",
            "A Hack You Can Try To Become a Creative Hero",
            "Unlock your creative potential",
            "I've stopped writing on Vocal. Well, evidentially, I haven't – I'm writing on Vocal right \
             now. Look at me go. The point is, creativity isn't about waiting for inspiration—it's \
             about showing up consistently and doing the work. Here's a simple hack that changed \
             everything for me.",
            "Jamie Jackson",
            "https://randomuser.me/api/portraits/men/32.jpg",
            true,
            "about 12 hours ago in Art",
        ),
        post(
            3,
            "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=400&q=80",
            "My Experience on Vocal",
            "One month milestone",
            "Celebrate good times, come on! 🎉 Today marks a special little milestone: I've officially \
             been on Vocal for one whole month. It's been an incredible journey of discovery, \
             creativity, and community building. Here's what I've learned so far.",
            "Dalma Ubitz",
            "https://randomuser.me/api/portraits/women/22.jpg",
            false,
            "about 24 hours ago in Journal",
        ),
        post(
            4,
            "https://images.unsplash.com/photo-1544027993-37dbfe43562a?auto=format&fit=crop&w=400&q=80",
            "In Case I Never Fall",
            "A heartfelt message",
            "To My Parents: My voice is sometimes clearer when written. Not tangled in sobs, not \
             silenced by the weight of unshed tears. These words carry the love I struggle to speak \
             aloud, the gratitude that overwhelms me, and the fears that keep me awake at night.",
            "Nicole Fenn",
            "https://randomuser.me/api/portraits/women/12.jpg",
            false,
            "4 days ago in Poets",
        ),
    ]
}
