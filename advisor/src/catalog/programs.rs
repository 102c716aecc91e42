//! Bachelor programs suggested for each academic background.

use serde::Serialize;

use crate::profile::Background;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramList {
    pub icon: &'static str,
    pub title: &'static str,
    pub programs: &'static [&'static str],
}

const ICS: ProgramList = ProgramList {
    icon: "🖥️",
    title: "Computer Science & IT Programs",
    programs: &[
        "BS Computer Science",
        "BS Software Engineering",
        "BS Information Technology",
        "BS Artificial Intelligence / Data Science",
        "BS Cyber Security",
        "BS Game Development / Animation",
        "BS Mathematics",
        "BS Statistics",
        "BS Data Science / Analytics",
        "BS Actuarial Science",
        "BBA (Business Administration)",
    ],
};

const PRE_MEDICAL: ProgramList = ProgramList {
    icon: "🏥",
    title: "Health & Medicine Programs",
    programs: &[
        "MBBS (Medicine & Surgery)",
        "BDS (Dental Surgery)",
        "DPT (Doctor of Physical Therapy)",
        "Pharm-D (Pharmacy)",
        "BS Nursing",
        "BS Biotechnology",
        "BS Microbiology",
        "BS Biochemistry",
        "BS Genetics",
        "BS Molecular Biology",
        "BS Medical Laboratory Technology",
        "BS Nutrition & Dietetics",
        "BS Psychology",
        "BS Zoology",
        "BS Botany",
        "BS Environmental Science",
        "BS Bioinformatics",
    ],
};

const PRE_ENGINEERING: ProgramList = ProgramList {
    icon: "🏗️",
    title: "Engineering & Technology Programs",
    programs: &[
        "BE/BSc Mechanical Engineering",
        "BE/BSc Electrical Engineering",
        "BE/BSc Civil Engineering",
        "BE/BSc Chemical Engineering",
        "BE/BSc Computer Engineering",
        "BE/BSc Electronics Engineering",
        "BS Computer Science",
        "BS Software Engineering",
        "BS Artificial Intelligence / Data Science",
        "BS Information Technology",
        "BS Physics",
        "BS Chemistry",
        "BS Mathematics",
        "BS Statistics",
        "BS Environmental Science",
        "BS Robotics / Mechatronics",
        "BBA (with Maths background)",
    ],
};

const ARTS: ProgramList = ProgramList {
    icon: "📚",
    title: "Humanities & Social Sciences Programs",
    programs: &[
        "BA English",
        "BA Urdu",
        "BA Sociology",
        "BS Psychology",
        "BS International Relations",
        "BS Media & Communication",
        "BS Mass Communication / Journalism",
        "BS Political Science",
        "BS Social Work",
        "LLB (Law)",
        "B.Ed (Education)",
        "BS Fine Arts / Design",
        "BS Fashion Design",
        "BS Film / Animation / Multimedia",
        "BS Performing Arts / Music",
        "BS History / Archaeology",
    ],
};

const COMMERCE: ProgramList = ProgramList {
    icon: "💼",
    title: "Business & Commerce Programs",
    programs: &[
        "BBA (Bachelor of Business Administration)",
        "BS Accounting & Finance",
        "BS Economics",
        "BS Management",
        "BS Marketing",
        "BS Entrepreneurship",
        "BS Business Analytics",
        "BS Supply Chain / Logistics",
        "BS Human Resource Management",
        "CA / ACCA / CMA / CPA",
        "BS Banking & Finance",
        "BS Computer Science (some universities)",
        "BS Information Technology",
        "BS Finance + IT (Financial Tech)",
        "LLB (Law after BBA)",
        "BS Stock Market / Investment",
    ],
};

pub fn programs_for(background: Background) -> &'static ProgramList {
    match background {
        Background::Ics => &ICS,
        Background::PreMedical => &PRE_MEDICAL,
        Background::PreEngineering => &PRE_ENGINEERING,
        Background::Arts => &ARTS,
        Background::Commerce => &COMMERCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_counts() {
        assert_eq!(programs_for(Background::Ics).programs.len(), 11);
        assert_eq!(programs_for(Background::PreMedical).programs.len(), 17);
        assert_eq!(programs_for(Background::PreEngineering).programs.len(), 17);
        assert_eq!(programs_for(Background::Arts).programs.len(), 16);
        assert_eq!(programs_for(Background::Commerce).programs.len(), 16);
    }

    #[test]
    fn test_first_program_per_background() {
        assert_eq!(
            programs_for(Background::PreMedical).programs[0],
            "MBBS (Medicine & Surgery)"
        );
        assert_eq!(programs_for(Background::Arts).title, "Humanities & Social Sciences Programs");
    }
}
