/// How a hyperlink should be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Another site; opens in a new browsing context without a referrer
    External,
    /// A `mailto:` address
    Mail,
    /// A page on this site
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: LinkKind,
}

impl Link {
    pub const fn external(label: &'static str, href: &'static str) -> Self {
        Self { label, href, kind: LinkKind::External }
    }

    pub const fn mail(address: &'static str, href: &'static str) -> Self {
        Self { label: address, href, kind: LinkKind::Mail }
    }

    pub const fn internal(label: &'static str, href: &'static str) -> Self {
        Self { label, href, kind: LinkKind::Internal }
    }

    /// External links get `target="_blank"` and `rel="noopener noreferrer"`
    pub fn opens_new_context(&self) -> bool {
        self.kind == LinkKind::External
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeGoal {
    pub headline: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portrait {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Everything the biography page says, fixed at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub portrait: Portrait,
    pub greeting: &'static str,
    pub bio: &'static str,
    pub goals_heading: &'static str,
    pub goals: [LifeGoal; 4],
    pub reading: Link,
    pub guitar: Link,
    pub social_handle: Link,
    pub emails: [Link; 2],
    pub favorite_story: Link,
}

pub const PROFILE: Profile = Profile {
    name: "Rana Banankhah",
    portrait: Portrait {
        src: "./assets/profile_picture.png",
        alt: "Rana Banankhah",
    },
    greeting: "Hi, I'm Rana 👋",
    bio: "I study Computer Science and Product Design at Stanford.",
    goals_heading: "These are my life goals:",
    goals: [
        LifeGoal {
            headline: "Explore as much as possible.",
            detail: "Physical exploration (traveling, entering rooms I’m not supposed to be in) and conceptual exploration (learning new things, meeting new people)",
        },
        LifeGoal {
            headline: "Live Fully.",
            detail: "Cram as much as I can into this one, precious life I have. Live 10 lives in one",
        },
        LifeGoal {
            headline: "Live Freely.",
            detail: "Financial freedom. Physical freedom. Freedom from social pressures.",
        },
        LifeGoal {
            headline: "Laugh.",
            detail: "A lot.",
        },
    ],
    reading: Link::external("reading,", "https://www.goodreads.com/ranaba"),
    guitar: Link::external("playing guitar.", "https://www.ultimate-guitar.com/u/froggiewrld"),
    social_handle: Link::external("@ranabanankhah", "https://twitter.com/ranabanankhah"),
    emails: [
        Link::mail("ranab@stanford.edu", "mailto:ranab@stanford.edu"),
        Link::mail("rbanankhah@gc-fellows.com", "mailto:rbanankhah@gc-fellows.com"),
    ],
    favorite_story: Link::external(
        "favorite story",
        "https://medium.com/finn-jackson/the-parable-of-the-taoist-farmer-8f52bba7f12c",
    ),
};
