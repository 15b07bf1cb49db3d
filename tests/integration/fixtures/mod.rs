// Golden annotations for the built-in sample sentences
// WHY: one line per sample, same order as SAMPLE_SENTENCES, bracket marker style

pub const SAMPLE_ANNOTATED: &str = r#"Hi, my name is [NAME: Ahmad bin Abdullah] and you can reach me at [PHONE: 012-3456789] or email me at [EMAIL: ahmad.abdullah@gmail.com]
Please contact [NAME: Siti Nurhaliza] at [PHONE: +60123456789] or [EMAIL: siti.nurhaliza@yahoo.com.my] for more information
[NAME: Lim Wei Ming] from [NAME: Kuala Lumpur] can be reached at [PHONE: 03-12345678] or [EMAIL: lim.weiming@company.my]
Dr. [NAME: Rajesh s/o Krishnan] is available at [PHONE: 019-8765432] and his email is [EMAIL: rajesh.krishnan@hospital.my]
For urgent matters, call [NAME: Tan Ah Kow] at [PHONE: +603-87654321] or send an email to [EMAIL: tan.ahkow@business.com.my]
[NAME: Priya d/o Raman] works at the office, her contact is [PHONE: 017-2345678] and email [EMAIL: priya.raman@office.org]
[NAME: Muhammad Al]-Fatih can be contacted via phone [PHONE: 016-9876543] or email [EMAIL: muhammad.alfatih@university.edu.my]
[NAME: Lee Chong Wei]'s assistant can be reached at [PHONE: 04-1234567] or [EMAIL: assistant@leechongwei.com]
Contact our customer service team at 1300-88-1234 or [EMAIL: support@company.com.my] for assistance
The meeting with [NAME: Wong Kar Wai] is scheduled for tomorrow, please call 082-765432 or email [EMAIL: wong.karwai@film.my]"#;

/// Span count per sample sentence
pub const SAMPLE_SPAN_COUNTS: &[usize] = &[3, 3, 4, 3, 3, 3, 3, 3, 1, 2];

/// Dataset values whose label disagrees with the anchored pattern, with the
/// validator's actual answer
pub const LABEL_DIVERGENCES: &[(&str, bool)] = &[
    ("Rajesh s/o Krishnan", false),
    ("Priya d/o Raman", false),
    ("082-123456", false),
    ("+1234567890", true),
    ("user_name@domain.org", false),
    (".user@domain.com", true),
    ("user@domain..com", true),
];
