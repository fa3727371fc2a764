//! Static page content. Every list here is fixed at build time; the carousel
//! relies on the order of [`TESTIMONIALS`].

use crate::components::icons::IconKind;
use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub rating: u8,
    pub quote: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub specialization: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
    pub linkedin: &'static str,
}

impl TeamMember {
    /// Mail address shown on the team card: the first space in the name
    /// becomes a dot, e.g. `kofi.mensah@adinkralaw.com`.
    pub fn email(&self) -> String {
        format!(
            "{}@{}",
            self.name.to_lowercase().replacen(' ', ".", 1),
            config::FIRM_EMAIL_DOMAIN
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PracticeArea {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Benefit {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BadgeStat {
    pub icon: IconKind,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactInfo {
    pub icon: IconKind,
    pub label: &'static str,
    pub value: &'static str,
    pub subtext: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub section: &'static str,
}

/// Fragment ids of the page sections, in render order.
pub mod sections {
    pub const HERO: &str = "hero";
    pub const ABOUT: &str = "about";
    pub const PRACTICE: &str = "practice";
    pub const WHY_US: &str = "why-us";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const TEAM: &str = "team";
    pub const CONTACT: &str = "contact";

    pub const ALL: [&str; 7] = [HERO, ABOUT, PRACTICE, WHY_US, TESTIMONIALS, TEAM, CONTACT];
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", section: sections::ABOUT },
    NavLink { label: "Services", section: sections::PRACTICE },
    NavLink { label: "Why Us", section: sections::WHY_US },
    NavLink { label: "Testimonials", section: sections::TESTIMONIALS },
    NavLink { label: "Team", section: sections::TEAM },
    NavLink { label: "Contact", section: sections::CONTACT },
];

pub const FOOTER_QUICK_LINKS: &[NavLink] = &[
    NavLink { label: "About Us", section: sections::ABOUT },
    NavLink { label: "Practice Areas", section: sections::PRACTICE },
    NavLink { label: "Our Team", section: sections::TEAM },
    NavLink { label: "Testimonials", section: sections::TESTIMONIALS },
    NavLink { label: "Contact", section: sections::CONTACT },
];

pub const FOOTER_LEGAL_LINKS: &[&str] = &[
    "Privacy Policy",
    "Terms of Service",
    "Cookie Policy",
    "Disclaimer",
    "Careers",
];

pub const OFFICE_CITIES: &[&str] = &["Lagos", "Accra", "Nairobi", "Johannesburg", "Douala"];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Amara Okonkwo",
        company: "TechStart Nigeria",
        location: "Lagos, Nigeria",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=200&q=80&auto=format&fit=crop",
        rating: 5,
        quote: "Adinkra & Associates handled our company's merger with exceptional professionalism. Their deep understanding of Nigerian corporate law and cross-border regulations made the complex process smooth. Highly recommend for any business legal matters.",
    },
    Testimonial {
        id: 2,
        name: "Dr. Kwame Asante",
        company: "Ghana Medical Foundation",
        location: "Accra, Ghana",
        image: "https://images.unsplash.com/photo-1519345182560-3f2917c472ef?w=200&q=80&auto=format&fit=crop",
        rating: 5,
        quote: "When our foundation faced a complex land dispute, this team stepped in with remarkable expertise. Their knowledge of Ghanaian property law and dedication to our cause resulted in a favorable outcome. Truly exceptional legal partners.",
    },
    Testimonial {
        id: 3,
        name: "Fatima Mwangi",
        company: "East Africa Exports Ltd",
        location: "Nairobi, Kenya",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=200&q=80&auto=format&fit=crop",
        rating: 5,
        quote: "The team provided outstanding support for our international trade contracts. Their pan-African expertise and attention to detail protected our interests in multiple jurisdictions. A true asset to any business operating across Africa.",
    },
    Testimonial {
        id: 4,
        name: "Emmanuel Douala",
        company: "Cameroon Construction Group",
        location: "Douala, Cameroon",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=200&q=80&auto=format&fit=crop",
        rating: 5,
        quote: "Navigating construction law in Central Africa requires deep local knowledge. Adinkra & Associates delivered exactly that, helping us resolve contract disputes and regulatory challenges with efficiency and expertise.",
    },
    Testimonial {
        id: 5,
        name: "Zainab Ibrahim",
        company: "Family Office",
        location: "Abuja, Nigeria",
        image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=200&q=80&auto=format&fit=crop",
        rating: 5,
        quote: "During a difficult family matter, the team showed incredible compassion while maintaining the highest professional standards. They guided us through the legal process with sensitivity and achieved the best outcome for everyone involved.",
    },
    Testimonial {
        id: 6,
        name: "Jean-Pierre Nkomo",
        company: "Pan-African Investments",
        location: "Johannesburg, South Africa",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80&auto=format&fit=crop",
        rating: 5,
        quote: "For cross-border investment matters, there's no better firm in Africa. Their network spans the continent, and their expertise in international business law is unmatched. They've been our legal partners for five years now.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Chioma Adeyemi",
        title: "Founding Partner",
        specialization: "Corporate & Commercial Law",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&q=80&auto=format&fit=crop",
        bio: "With over 20 years of experience, Chioma leads our corporate practice and has advised on landmark M&A transactions across West Africa. Harvard Law School graduate.",
        linkedin: "#",
    },
    TeamMember {
        name: "Kofi Mensah",
        title: "Senior Partner",
        specialization: "Dispute Resolution",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&q=80&auto=format&fit=crop",
        bio: "Kofi is a renowned litigator with expertise in complex commercial disputes and international arbitration. Former judge advocate with the Ghana Bar Association.",
        linkedin: "#",
    },
    TeamMember {
        name: "Amina Diallo",
        title: "Partner",
        specialization: "Real Estate & Property Law",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&q=80&auto=format&fit=crop",
        bio: "Amina specializes in cross-border real estate transactions and has facilitated major property developments in East and West Africa. Cambridge University alumna.",
        linkedin: "#",
    },
    TeamMember {
        name: "Oluwaseun Bakare",
        title: "Partner",
        specialization: "Family & Private Client",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&q=80&auto=format&fit=crop",
        bio: "Oluwaseun leads our family law practice with compassion and expertise, handling high-profile divorce, custody, and estate planning matters across Nigeria.",
        linkedin: "#",
    },
];

pub const PRACTICE_AREAS: &[PracticeArea] = &[
    PracticeArea {
        icon: IconKind::Briefcase,
        title: "Business & Corporate Law",
        description: "Comprehensive legal solutions for businesses across Africa, including company formation, mergers, acquisitions, and corporate governance.",
        accent: "#C9A96E",
    },
    PracticeArea {
        icon: IconKind::Users,
        title: "Family Law",
        description: "Sensitive handling of family matters including divorce, child custody, adoption, and estate planning with compassion and discretion.",
        accent: "#2E7D32",
    },
    PracticeArea {
        icon: IconKind::Building,
        title: "Real Estate Law",
        description: "Expert guidance on property transactions, land disputes, construction contracts, and real estate development across African markets.",
        accent: "#001F3F",
    },
    PracticeArea {
        icon: IconKind::Gavel,
        title: "Dispute Resolution",
        description: "Strategic litigation and alternative dispute resolution services including arbitration and mediation for complex commercial disputes.",
        accent: "#C9A96E",
    },
    PracticeArea {
        icon: IconKind::FileText,
        title: "Contract Law",
        description: "Drafting, reviewing, and negotiating contracts to protect your interests in domestic and international business transactions.",
        accent: "#2E7D32",
    },
    PracticeArea {
        icon: IconKind::Scale,
        title: "Civil Litigation",
        description: "Vigorous courtroom representation for civil matters, defending your rights with strategic advocacy and thorough preparation.",
        accent: "#001F3F",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: 25, suffix: "+", label: "Years of Excellence" },
    Stat { value: 98, suffix: "%", label: "Success Rate" },
    Stat { value: 1500, suffix: "+", label: "Cases Handled" },
    Stat { value: 15, suffix: "", label: "African Countries" },
];

pub const ABOUT_STATS: &[BadgeStat] = &[
    BadgeStat { icon: IconKind::Scale, value: "25+", label: "Years" },
    BadgeStat { icon: IconKind::Award, value: "500+", label: "Cases Won" },
    BadgeStat { icon: IconKind::Users, value: "1000+", label: "Clients" },
];

pub const ABOUT_BADGES: &[&str] = &["Pan-African Presence", "Multilingual Team", "24/7 Support"];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: IconKind::Shield,
        title: "Trusted Reputation",
        description: "A legacy of integrity and excellence built over 25 years of legal practice across Africa.",
    },
    Benefit {
        icon: IconKind::Globe,
        title: "Pan-African Reach",
        description: "Offices and partnerships in 15 African countries, providing seamless cross-border legal services.",
    },
    Benefit {
        icon: IconKind::Handshake,
        title: "Client-First Approach",
        description: "Every client receives personalized attention and strategic counsel tailored to their unique needs.",
    },
    Benefit {
        icon: IconKind::Clock,
        title: "Efficient Resolution",
        description: "Committed to achieving the best outcomes in the shortest time, respecting your time and resources.",
    },
    Benefit {
        icon: IconKind::Award,
        title: "Award-Winning Team",
        description: "Recognized by leading legal publications and industry bodies for exceptional legal services.",
    },
];

pub const TRUST_BADGES: &[&str] = &[
    "Bar Association Certified",
    "ISO Compliant",
    "Pro Bono Partner",
    "Legal Aid Provider",
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: IconKind::Phone,
        label: "Phone",
        value: "+234 800 ADINKRA",
        subtext: "+254 700 ADINKRA",
    },
    ContactInfo {
        icon: IconKind::Mail,
        label: "Email",
        value: "info@adinkralaw.com",
        subtext: "consult@adinkralaw.com",
    },
    ContactInfo {
        icon: IconKind::MapPin,
        label: "Headquarters",
        value: "Victoria Island, Lagos",
        subtext: "With offices across Africa",
    },
    ContactInfo {
        icon: IconKind::Clock,
        label: "Business Hours",
        value: "Mon - Fri: 8AM - 6PM",
        subtext: "24/7 Emergency Line Available",
    },
];

pub const SERVICES: &[&str] = &[
    "Business & Corporate Law",
    "Family Law",
    "Real Estate Law",
    "Dispute Resolution",
    "Contract Law",
    "Civil Litigation",
    "Other Legal Services",
];

pub const SOCIAL_LINKS: &[(IconKind, &str)] = &[
    (IconKind::Linkedin, "LinkedIn"),
    (IconKind::Twitter, "Twitter"),
    (IconKind::Facebook, "Facebook"),
    (IconKind::Instagram, "Instagram"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn testimonial_list_is_fixed() {
        assert_eq!(TESTIMONIALS.len(), 6);
        let ids: Vec<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(TESTIMONIALS.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn lists_have_expected_sizes() {
        assert_eq!(TEAM.len(), 4);
        assert_eq!(PRACTICE_AREAS.len(), 6);
        assert_eq!(BENEFITS.len(), 5);
        assert_eq!(STATS.len(), 4);
        assert_eq!(CONTACT_INFO.len(), 4);
        assert_eq!(SERVICES.len(), 7);
    }

    #[test]
    fn every_link_points_at_a_real_section() {
        for link in NAV_LINKS.iter().chain(FOOTER_QUICK_LINKS) {
            assert!(
                sections::ALL.contains(&link.section),
                "{} -> #{} has no matching section",
                link.label,
                link.section
            );
        }
    }

    #[test]
    fn team_email_uses_first_space_only() {
        assert_eq!(TEAM[1].email(), "kofi.mensah@adinkralaw.com");
        let member = TeamMember {
            name: "Ama Serwaa Boateng",
            ..TEAM[0].clone()
        };
        assert_eq!(member.email(), "ama.serwaa boateng@adinkralaw.com");
    }
}
