//! Static portfolio content: the project archive, profile data and contact
//! channels. The catalog is fixed at compile time; front ends only read it.

use serde::Serialize;

/// One archived project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub year: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
}

static PROJECTS: [Project; 6] = [
    Project {
        id: "1",
        title: "Nebula Stream",
        category: "AI Architecture",
        year: "2025",
        image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=1000&auto=format&fit=crop",
        description: "A decentralized real-time data processing engine powered by generative AI. Processes over 1M events/sec with adaptive scaling.",
        link: None,
    },
    Project {
        id: "2",
        title: "Void Interface",
        category: "Creative Coding",
        year: "2024",
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1000&auto=format&fit=crop",
        description: "Experimental WebGL interface exploring fluid dynamics and user interaction. Won Site of the Day at Awwwards.",
        link: None,
    },
    Project {
        id: "3",
        title: "Synth Protocol",
        category: "Web3 & AI",
        year: "2024",
        image: "https://images.unsplash.com/photo-1639322537228-ad7117a7a640?q=80&w=1000&auto=format&fit=crop",
        description: "Smart contract auditing tool leveraging LLMs to detect vulnerabilities in Solidity codebases.",
        link: None,
    },
    Project {
        id: "4",
        title: "Chroma OS",
        category: "System Design",
        year: "2023",
        image: "https://images.unsplash.com/photo-1510519138101-570d1dca3d66?q=80&w=1000&auto=format&fit=crop",
        description: "A web-based operating system concept focusing on accessibility and AI-first workflows.",
        link: None,
    },
    Project {
        id: "5",
        title: "Echo Gardens",
        category: "Generative Art",
        year: "2023",
        image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1000&auto=format&fit=crop",
        description: "Algorithmic plant growth simulation using L-systems and Three.js.",
        link: None,
    },
    Project {
        id: "6",
        title: "Neural Beat",
        category: "Audio Engineering",
        year: "2022",
        image: "https://images.unsplash.com/photo-1478737270239-2f02b77ac6d5?q=80&w=1000&auto=format&fit=crop",
        description: "Real-time audio visualization tool using TensorFlow.js.",
        link: None,
    },
];

/// All projects, newest first.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// The site's top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Work,
    About,
    Contact,
}

impl Page {
    pub fn all() -> [Page; 4] {
        [Page::Home, Page::Work, Page::About, Page::Contact]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Work => "work",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Status: Online",
            Page::Work => "Project Archives",
            Page::About => "The Alchemist",
            Page::Contact => "Initiate_Handshake",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skill {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// The author profile shown on the about page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub alias: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub skills: &'static [Skill],
    pub stats: &'static [Stat],
}

static PROFILE: Profile = Profile {
    name: "Muhammad Karim Anggara",
    alias: "MKA",
    role: "AI Vibe Coder",
    tagline: "Synthesizing modern AI capabilities with raw creative expression to build the next generation of web interfaces.",
    bio: &[
        "I transform logic into emotion. My workflow sits at the boundary where high-performance engineering meets generative serendipity.",
        "As an AI Vibe Coder, I specialize in architecting systems that don't just solve problems, but create atmospheres. Using Gemini 3 and 2.5 series, I build reactive, intelligent interfaces.",
    ],
    skills: &[
        Skill { label: "Frontend", value: "React / Next" },
        Skill { label: "AI Core", value: "Gemini / LLMs" },
        Skill { label: "Creative", value: "WebGL / Three" },
    ],
    stats: &[
        Stat { value: "5+", label: "Years of Code" },
        Stat { value: "30+", label: "AI Deployments" },
    ],
};

pub fn profile() -> &'static Profile {
    &PROFILE
}

/// One collaboration track offered on the contact page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Offering {
    pub title: &'static str,
    pub blurb: &'static str,
}

static OFFERINGS: [Offering; 4] = [
    Offering { title: "Development", blurb: "Custom high-end web applications." },
    Offering { title: "AI Solutions", blurb: "LLM integration and agent architecture." },
    Offering { title: "Creative", blurb: "Interactive visual experiences." },
    Offering { title: "Consulting", blurb: "Technical leadership and strategy." },
];

pub fn offerings() -> &'static [Offering] {
    &OFFERINGS
}

/// A way to reach the author.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Channel {
    pub label: &'static str,
    pub handle: &'static str,
}

static CHANNELS: [Channel; 3] = [
    Channel { label: "Email", handle: "hi@karim.dev" },
    Channel { label: "Twitter", handle: "@mka_dev" },
    Channel { label: "GitHub", handle: "mkarim" },
];

pub fn channels() -> &'static [Channel] {
    &CHANNELS
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn archive_holds_six_projects_with_unique_ids() {
        let catalog = projects();
        assert_eq!(catalog.len(), 6);

        let ids: HashSet<&str> = catalog.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn projects_are_ordered_newest_first() {
        let years: Vec<&str> = projects().iter().map(|project| project.year).collect();
        let mut sorted = years.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
    }

    #[test]
    fn find_project_matches_by_id() {
        let project = find_project("3").unwrap();
        assert_eq!(project.title, "Synth Protocol");
        assert_eq!(project.category, "Web3 & AI");

        assert!(find_project("42").is_none());
    }

    #[test]
    fn project_wire_format_is_camel_case_without_empty_link() {
        let value = serde_json::to_value(find_project("1").unwrap()).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["title"], "Nebula Stream");
        assert!(value.get("link").is_none());
    }

    #[test]
    fn every_page_has_a_slug_and_title() {
        for page in Page::all() {
            assert!(!page.slug().is_empty());
            assert!(!page.title().is_empty());
        }
        assert_eq!(Page::Work.slug(), "work");
        assert_eq!(Page::Work.title(), "Project Archives");
    }

    #[test]
    fn contact_surface_is_complete() {
        assert_eq!(offerings().len(), 4);
        assert_eq!(channels().len(), 3);
        assert_eq!(channels()[0].handle, "hi@karim.dev");
    }

    #[test]
    fn profile_carries_skills_and_stats() {
        let profile = profile();
        assert_eq!(profile.alias, "MKA");
        assert_eq!(profile.skills.len(), 3);
        assert_eq!(profile.stats.len(), 2);
        assert_eq!(profile.bio.len(), 2);
    }
}
