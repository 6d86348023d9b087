//! Plain-text CV rendering.

use std::fmt::Write;

use crate::profile::{Profile, TimelineEntry};

/// MIME type of the downloaded CV.
pub const CV_MIME_TYPE: &str = "text/plain";

/// Button label while the CV is being prepared.
pub const DOWNLOADING_LABEL: &str = "Mengunduh...";

/// Toast shown once the download started.
pub const DOWNLOADED_NOTICE: &str = "CV berhasil diunduh!";

const RULE: &str = "========================================";

/// A rendered CV ready to be saved or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvDocument {
    pub file_name: String,
    pub content: String,
}

impl CvDocument {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            file_name: cv_file_name(&profile.name),
            content: render_cv(profile),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        CV_MIME_TYPE
    }
}

/// `CV_<Name_With_Underscores>.txt`
pub fn cv_file_name(name: &str) -> String {
    format!("CV_{}.txt", name.split_whitespace().collect::<Vec<_>>().join("_"))
}

/// Render the CV text.
pub fn render_cv(profile: &Profile) -> String {
    // Writing into a String cannot fail.
    let mut out = String::new();
    let _ = write_cv(&mut out, profile);
    out
}

fn write_cv(out: &mut String, p: &Profile) -> std::fmt::Result {
    writeln!(out, "CURRICULUM VITAE")?;
    writeln!(out)?;
    writeln!(out, "{}", p.name.to_uppercase())?;
    writeln!(out, "{}", p.title)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    writeln!(out, "INFORMASI PRIBADI")?;
    writeln!(out, "Email: {}", p.contact.email)?;
    writeln!(out, "LinkedIn: {}", p.contact.linkedin)?;
    writeln!(out, "GitHub: {}", p.contact.github)?;
    writeln!(out, "Instagram: @{}", p.contact.instagram)?;
    writeln!(out)?;

    writeln!(out, "PROFIL")?;
    writeln!(out, "{}", p.summary)?;
    writeln!(out)?;

    write_timeline(out, "PENDIDIKAN", &p.education)?;
    write_timeline(out, "PENGALAMAN", &p.experience)?;

    if !p.projects.is_empty() {
        writeln!(out, "PROYEK")?;
        for (i, project) in p.projects.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, project.name)?;
            writeln!(out, "   - {}", project.description)?;
            writeln!(out, "   - Teknologi: {}", project.technologies.join(", "))?;
            writeln!(out, "   - Link: {}", project.link)?;
            writeln!(out)?;
        }
    }

    if !p.skills.is_empty() {
        writeln!(out, "KEAHLIAN TEKNIS")?;
        writeln!(out)?;
        for category in &p.skills {
            writeln!(out, "{}:", category.category)?;
            writeln!(out, "- {}", category.items.join(", "))?;
            writeln!(out)?;
        }
    }

    if !p.certifications.is_empty() {
        writeln!(out, "SERTIFIKASI")?;
        for cert in &p.certifications {
            writeln!(out, "{}", cert.date)?;
            writeln!(out, "{} — {}", cert.name, cert.issuer)?;
            writeln!(out, "{}", cert.description)?;
            writeln!(out)?;
        }
    }

    writeln!(out, "MOTTO")?;
    writeln!(out, "\"{}\"", p.motto)?;
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "© {} {}", p.copyright_year, p.name)?;
    Ok(())
}

fn write_timeline(out: &mut String, heading: &str, entries: &[TimelineEntry]) -> std::fmt::Result {
    if entries.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", heading)?;
    for entry in entries {
        writeln!(out, "{}", entry.period)?;
        writeln!(out, "{}", entry.title)?;
        if let Some(place) = &entry.place {
            writeln!(out, "{}", place)?;
        }
        for highlight in &entry.highlights {
            writeln!(out, "- {}", highlight)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Profile {
        Profile::builtin().unwrap()
    }

    #[test]
    fn file_name_joins_words() {
        assert_eq!(
            cv_file_name("Rakha Raihan Alfarizky"),
            "CV_Rakha_Raihan_Alfarizky.txt"
        );
        assert_eq!(cv_file_name("  Ada   Lovelace "), "CV_Ada_Lovelace.txt");
    }

    #[test]
    fn header_and_footer() {
        let text = render_cv(&builtin());
        assert!(text.starts_with("CURRICULUM VITAE\n\nRAKHA RAIHAN ALFARIZKY\nCalon Software Engineer\n"));
        assert!(text.trim_end().ends_with("© 2025 Rakha Raihan Alfarizky"));
    }

    #[test]
    fn sections_appear_in_order() {
        let text = render_cv(&builtin());
        let order = [
            "INFORMASI PRIBADI",
            "PROFIL",
            "PENDIDIKAN",
            "PENGALAMAN",
            "PROYEK",
            "KEAHLIAN TEKNIS",
            "SERTIFIKASI",
            "MOTTO",
        ];
        let positions: Vec<usize> = order.iter().map(|h| text.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn projects_are_numbered() {
        let text = render_cv(&builtin());
        assert!(text.contains("1. Sistem Booking Jasa Terapi\n"));
        assert!(text.contains("   - Teknologi: Java, HTML5, CSS3, MySQL, Bootstrap, JavaScript\n"));
        assert!(text.contains("3. Aplikasi Pemesanan Tiket Bioskop (JSP Project)\n"));
    }

    #[test]
    fn contact_and_skills_lines() {
        let text = render_cv(&builtin());
        assert!(text.contains("Instagram: @rrahka_\n"));
        assert!(text.contains("Database & Tools:\n- MySQL, XAMPP, Git, GitHub, Docker, Laragon\n"));
        assert!(text.contains("Code Generation and Optimization Using IBM Granite — IBM\n"));
    }

    #[test]
    fn empty_sections_are_skipped() {
        let mut profile = builtin();
        profile.certifications.clear();
        profile.projects.clear();
        let text = render_cv(&profile);
        assert!(!text.contains("SERTIFIKASI"));
        assert!(!text.contains("PROYEK"));
        assert!(text.contains("MOTTO"));
    }

    #[test]
    fn document_uses_plain_text() {
        let doc = CvDocument::from_profile(&builtin());
        assert_eq!(doc.mime_type(), "text/plain");
        assert_eq!(doc.file_name, "CV_Rakha_Raihan_Alfarizky.txt");
    }
}
