//! # Static content
//!
//! Every record the pages render. All of it is compile-time literal data and
//! read-only for the lifetime of the page.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Partners
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerCategory {
    Education,
    Infrastructure,
    Technology,
}

/// Industry partner shown in the partner marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    /// Icon slug under `/assets/icons/`.
    pub icon: &'static str,
    pub description: &'static str,
    pub category: PartnerCategory,
}

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "DataCamp",
        icon: "datacamp",
        description: "Official learning partner for data science education",
        category: PartnerCategory::Education,
    },
    Partner {
        name: "Juniper Networks",
        icon: "juniper",
        description: "Infrastructure and networking solutions partner",
        category: PartnerCategory::Infrastructure,
    },
    Partner {
        name: "Red Hat",
        icon: "redhat",
        description: "Open source and cloud technology partner",
        category: PartnerCategory::Technology,
    },
    Partner {
        name: "Microsoft",
        icon: "microsoft",
        description: "Cloud and development tools partner",
        category: PartnerCategory::Technology,
    },
    Partner {
        name: "AWS",
        icon: "aws",
        description: "Cloud infrastructure partner",
        category: PartnerCategory::Infrastructure,
    },
    Partner {
        name: "Google Cloud",
        icon: "googlecloud",
        description: "Cloud and AI technology partner",
        category: PartnerCategory::Technology,
    },
];

/// Returns a shuffled copy of `items`, used for the second partner row.
pub fn shuffled<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

// ============================================================================
// Interest groups
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupName {
    SoftwareDevelopment,
    CloudAndInfrastructure,
}

impl GroupName {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupName::SoftwareDevelopment => "Software Development",
            GroupName::CloudAndInfrastructure => "Cloud and Infrastructure",
        }
    }

    /// Curriculum covered by the group.
    pub fn details(self) -> &'static [&'static str] {
        match self {
            GroupName::SoftwareDevelopment => &[
                "Web Development (Frontend & Backend)",
                "API Development & Integration",
                "Mobile App Development",
                "Machine Learning & AI Implementation",
                "Data Analysis & Visualization",
            ],
            GroupName::CloudAndInfrastructure => &[
                "Cloud Native & Microservices",
                "Computer Networks & Security",
                "Operating Systems (Linux/Unix)",
                "DevOps & CI/CD Pipelines",
                "System Administration",
            ],
        }
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestGroup {
    pub name: GroupName,
    pub description: &'static str,
}

pub const INTEREST_GROUPS: &[InterestGroup] = &[
    InterestGroup {
        name: GroupName::SoftwareDevelopment,
        description: "Master modern software engineering by building scalable applications and intelligent systems. From web platforms to AI integration, learn to solve real-world problems with code.",
    },
    InterestGroup {
        name: GroupName::CloudAndInfrastructure,
        description: "Learn to bridge the gap between development and operations. Develop expertise in managing and securing computer systems and networks. Learn essential skills for modern IT infrastructure.",
    },
];

// ============================================================================
// Lab infrastructure
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabSpec {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: Option<&'static str>,
    pub icon: Option<&'static str>,
}

pub const LAB_SPECS: &[LabSpec] = &[
    LabSpec {
        label: "CPU Cores",
        value: "64 Cores",
        detail: Some("AMD EPYC 7763, Intel i7, Intel i9"),
        icon: Some("cpu"),
    },
    LabSpec {
        label: "Memory",
        value: "512 GB",
        detail: Some("DDR4 ECC"),
        icon: Some("memory"),
    },
    LabSpec {
        label: "GPU",
        value: "NVIDIA RTX 3050, 4080",
        detail: Some("80 GB VRAM"),
        icon: Some("circuit-board"),
    },
    LabSpec {
        label: "Storage",
        value: "20 TB",
        detail: Some("NVMe SSD, HDD SATA"),
        icon: Some("hard-drive"),
    },
    LabSpec {
        label: "Network",
        value: "1 Gbps",
        detail: Some("Dedicated uplink"),
        icon: Some("network"),
    },
    LabSpec {
        label: "Workstations",
        value: "12 Units",
        detail: Some("Available 24/7"),
        icon: Some("monitor"),
    },
];

/// Border placement for one cell of the lab specs grid.
///
/// The grid is two columns on small screens and three on large ones; a cell
/// draws a right border unless it closes its row and a bottom border unless
/// it sits on the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridBorders {
    pub right_sm: bool,
    pub right_lg: bool,
    pub bottom_sm: bool,
    pub bottom_lg: bool,
}

impl GridBorders {
    pub fn for_cell(index: usize, total: usize) -> Self {
        let last_row = |cols: usize| {
            let tail = match total % cols {
                0 => cols,
                rem => rem,
            };
            index + tail >= total
        };
        Self {
            right_sm: index % 2 == 0,
            right_lg: index % 3 != 2,
            bottom_sm: !last_row(2),
            bottom_lg: !last_row(3),
        }
    }
}

// ============================================================================
// Internship placements
// ============================================================================

/// A senior member and the company they interned at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Senior {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    /// Logo path under `/assets/intern-company/`.
    pub logo: &'static str,
    pub study_program: &'static str,
    pub batch: &'static str,
}

pub const SENIORS: &[Senior] = &[
    Senior {
        name: "Naufal Farras Pratama",
        role: "Backend Engineer Intern",
        company: "Superbank",
        logo: "/assets/intern-company/superbank.svg",
        study_program: "Teknik Informatika",
        batch: "2022",
    },
    Senior {
        name: "Muhammad Istiqlal",
        role: "Cloud Development Engineer",
        company: "Datacomm Diangraha",
        logo: "/assets/intern-company/datacomm.svg",
        study_program: "Teknik Informatika",
        batch: "2022",
    },
    Senior {
        name: "Helmy Luqmanulhakim",
        role: "Application Developer",
        company: "Bank Central Asia",
        logo: "/assets/intern-company/bca.svg",
        study_program: "Teknik Informatika",
        batch: "2022",
    },
    Senior {
        name: "Cornelius Louis Nathan",
        role: "Software Engineer",
        company: "Citilink",
        logo: "/assets/intern-company/citilink.svg",
        study_program: "Teknik Informatika",
        batch: "2023",
    },
];

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    Planning,
    Ongoing,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Ongoing => "Ongoing",
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "status-completed",
            ProjectStatus::Planning => "status-planning",
            ProjectStatus::Ongoing => "status-ongoing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
    pub progress: u8,
}

impl Project {
    /// Progress as a percentage in `0..=100`.
    pub fn percent(&self) -> u8 {
        self.progress.min(100)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Lab Infrastructure",
        description: "Routers, switches and rack-mounted servers wired up for hands-on networking and systems work.",
        status: ProjectStatus::Completed,
        progress: 100,
    },
    Project {
        title: "Syntesa Website",
        description: "The lab's public site, rebuilt as a Rust and WebAssembly application.",
        status: ProjectStatus::Ongoing,
        progress: 70,
    },
    Project {
        title: "Cloud Native Playground",
        description: "Shared Kubernetes environment for members to deploy and observe microservices.",
        status: ProjectStatus::Planning,
        progress: 15,
    },
];

// ============================================================================
// About page
// ============================================================================

pub const ABOUT_HEADING_LINES: &[&str] = &["About", "The Lab"];

pub const ABOUT_INTRO: &str = "The Software Engineering Lab (Syntesa) at Universitas Negeri Surabaya is a research and development facility focused on advancing software construction methodologies, cloud-native systems, and applied machine learning.";

pub const MISSION: &str = "To cultivate technically excellent engineers who can design, build, and maintain software systems at scale, grounded in research and driven by real-world impact.";

pub const MISSION_DETAIL: &str = "We operate at the intersection of academia and industry, bridging the gap between theoretical computer science and practical software engineering. Our members work on projects that ship, with partners who build production systems.";

pub const LEADERSHIP_INTRO: &str = "Our lab is led by faculty advisors and student leaders who bring together academic rigor and practical engineering experience.";

/// Statement revealed word by word on the home page.
pub const MISSION_STATEMENT: &str = "We believe that great software is built through rigorous research, relentless experimentation, and a commitment to engineering excellence. Every line of code is a step toward the future.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[TimelineEvent] = &[
    TimelineEvent {
        year: "2023",
        title: "Lab Founded",
        description: "Software Engineering Lab established at UNESA's Faculty of Engineering, Department of Informatics Engineering.",
    },
    TimelineEvent {
        year: "2024",
        title: "First Partnerships",
        description: "Formed strategic partnerships with DataCamp, Juniper Networks, Red Hat, and major cloud providers.",
    },
    TimelineEvent {
        year: "2025",
        title: "Infrastructure Deployed",
        description: "Equipped the lab with dedicated networking and server infrastructure; routers, switches, and rack-mounted servers for hands-on learning.",
    },
    TimelineEvent {
        year: "2026",
        title: "Current Batch",
        description: "Expanded to 26+ active members across Software Development and Cloud & Infrastructure interest groups.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Rigor",
        description: "We hold ourselves to high standards. Every project, every line of code, every research output goes through peer review.",
    },
    Principle {
        title: "Openness",
        description: "Open-source by default. We share our work, our processes, and our learnings with the wider community.",
    },
    Principle {
        title: "Collaboration",
        description: "Complex problems require diverse perspectives. We work across disciplines and with industry partners.",
    },
    Principle {
        title: "Impact",
        description: "We build things that matter. Our work addresses real problems in education, infrastructure, and software systems.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub role: &'static str,
    pub name: &'static str,
    pub focus: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        role: "Lab Director",
        name: "I Made Suartana, S.Kom., M.Kom.",
        focus: "Research Direction & Academic Oversight",
    },
    TeamMember {
        role: "Lead - Software Development",
        name: "Mohammad Ariffansyah",
        focus: "Web, Mobile, AI/ML Projects",
    },
    TeamMember {
        role: "Lead - Cloud & Infrastructure",
        name: "Muhammad Istiqlal",
        focus: "DevOps, Networking, System Administration",
    },
];

// ============================================================================
// Statistics
// ============================================================================

/// A numeric statistic rendered through the animated counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: i64,
    pub suffix: &'static str,
    pub pad_digits: usize,
    /// Rendered inside a `<time>` element.
    pub is_year: bool,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { label: "Research Projects", value: 50, suffix: "+", pad_digits: 0, is_year: false },
    Stat { label: "Industry Partners", value: 10, suffix: "+", pad_digits: 0, is_year: false },
    Stat { label: "Published Papers", value: 100, suffix: "+", pad_digits: 0, is_year: false },
    Stat { label: "Student Members", value: 50, suffix: "+", pad_digits: 0, is_year: false },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { label: "Active Members", value: 26, suffix: "+", pad_digits: 0, is_year: false },
    Stat { label: "Interest Groups", value: 2, suffix: "", pad_digits: 2, is_year: false },
    Stat { label: "Industry Partners", value: 6, suffix: "", pad_digits: 2, is_year: false },
    Stat { label: "Year Founded", value: 2023, suffix: "", pad_digits: 0, is_year: true },
];

// ============================================================================
// Join section
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What's the application process?",
        answer: "Our application process consists of three steps: online application submission, technical assessment, and team interview. The entire process typically takes 2-3 weeks.",
    },
    Faq {
        question: "What are the prerequisites?",
        answer: "Basic programming knowledge, strong problem-solving skills, and passion for technology. Specific requirements vary by interest groups.",
    },
    Faq {
        question: "When can I start?",
        answer: "Applications for the 2026 batch are now closed. Join our Discord to stay updated on future openings.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit { title: "Hands-on Learning", description: "Work on real projects with real impact" },
    Benefit { title: "Expert Mentorship", description: "Learn from industry practitioners and academics" },
    Benefit { title: "Research Opportunities", description: "Push the boundaries of software engineering" },
    Benefit { title: "Growth Opportunities", description: "Build your career with practical experience" },
];

/// Accordion where at most one entry is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, or closes it when it is already the open entry.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

// ============================================================================
// Links
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", href: "https://github.com/wearesyntesa", icon: "github" },
    SocialLink { name: "Instagram", href: "https://instagram.com/wearesyntesa", icon: "instagram" },
    SocialLink { name: "Discord", href: "https://discord.gg/F7Wx88yZFy", icon: "discord" },
];

/// Two-digit ordinal, `1` -> `"01"`.
pub fn ordinal(index: usize) -> String {
    format!("{:02}", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_group_details() {
        assert_eq!(GroupName::SoftwareDevelopment.details().len(), 5);
        assert_eq!(
            GroupName::CloudAndInfrastructure.details()[4],
            "System Administration"
        );
        assert_eq!(INTEREST_GROUPS[1].name.to_string(), "Cloud and Infrastructure");
    }

    #[test]
    fn test_shuffled_keeps_members() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut names: Vec<_> = shuffled(PARTNERS, &mut rng).iter().map(|p| p.name).collect();
        let mut expected: Vec<_> = PARTNERS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_grid_borders() {
        // Six cells: rows of two are {0,1} {2,3} {4,5}; rows of three are {0,1,2} {3,4,5}.
        let first = GridBorders::for_cell(0, 6);
        assert!(first.right_sm && first.right_lg && first.bottom_sm && first.bottom_lg);

        let third = GridBorders::for_cell(2, 6);
        assert!(third.right_sm);
        assert!(!third.right_lg);
        assert!(third.bottom_lg);

        let fourth = GridBorders::for_cell(3, 6);
        assert!(!fourth.bottom_lg);
        assert!(fourth.bottom_sm);

        let last = GridBorders::for_cell(5, 6);
        assert!(!last.bottom_sm && !last.bottom_lg && !last.right_lg);

        // Odd total: the lone cell of the last small-screen row.
        let lone = GridBorders::for_cell(4, 5);
        assert!(!lone.bottom_sm);
    }

    #[test]
    fn test_accordion_single_open() {
        let mut faq = Accordion::default();
        faq.toggle(0);
        assert!(faq.is_open(0));
        faq.toggle(2);
        assert!(faq.is_open(2));
        assert!(!faq.is_open(0));
        faq.toggle(2);
        assert!(!faq.is_open(2));
    }

    #[test]
    fn test_project_percent_clamped() {
        let project = Project { progress: 140, ..PROJECTS[0] };
        assert_eq!(project.percent(), 100);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "01");
        assert_eq!(ordinal(12), "12");
    }
}
