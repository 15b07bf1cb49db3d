// WHY: fixed labelled inputs for human QA annotation plus the sample sentences
// fed to the extractor; labels record what an annotator should say, not what
// the validators currently answer

use serde::{Deserialize, Serialize};

use crate::data_class::DataClass;

/// One labelled input awaiting human annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCase {
    pub id: String,
    pub value: String,
    pub class: DataClass,
    pub expected_match: bool,
    pub category: String,
}

pub const POSITIVE_NAMES: &[&str] = &[
    "Ahmad bin Abdullah",
    "Siti Nurhaliza binti Ahmad",
    "Lim Wei Ming",
    "Tan Ah Kow",
    "Rajesh s/o Krishnan",
    "Priya d/o Raman",
    "Muhammad Al-Fatih",
    "Lee Chong Wei",
    "Nurul Ain",
    "Wong Kar Wai",
    "Deepika Padukone",
    "Aziz bin Omar",
    "Fatimah Az-Zahra",
    "Chen Li Hua",
    "Ravi Kumar",
    "Aminah bte Hassan",
];

pub const NEGATIVE_NAMES: &[&str] = &[
    "123Ahmad",
    "User@Name",
    "A",
    "Name with numbers 123",
    "Special#Characters",
    "VeryLongNameThatExceedsTheTypicalLengthLimitForMalaysianNames",
    "",
    "Name_with_underscore",
    "Name%with%percent",
];

pub const POSITIVE_PHONES: &[&str] = &[
    "+60123456789",
    "60123456789",
    "0123456789",
    "012-3456789",
    "+603-12345678",
    "03-12345678",
    "082-123456",
    "019-1234567",
    "017-8901234",
    "016-7654321",
    "04-1234567",
    "07-3456789",
];

pub const NEGATIVE_PHONES: &[&str] = &[
    "123456",
    "+1234567890",
    "abc123456789",
    "012345",
    "+60-12-345-6789",
    "60 123 456 789",
    "012.345.6789",
    "++60123456789",
    "601234567890123",
];

pub const POSITIVE_EMAILS: &[&str] = &[
    "user@example.com",
    "ahmad.ibrahim@gmail.com",
    "siti123@yahoo.com.my",
    "lim.wei@company.my",
    "test.email+tag@domain.co.uk",
    "user_name@domain.org",
    "firstname.lastname@company.com.my",
    "admin@gov.my",
    "support@bank.com.my",
];

pub const NEGATIVE_EMAILS: &[&str] = &[
    "invalid.email",
    "@domain.com",
    "user@",
    "user name@domain.com",
    "user@domain",
    "user@@domain.com",
    "user@.com",
    ".user@domain.com",
    "user@domain..com",
];

/// Free-text sentences mixing names, phone numbers and email addresses
pub const SAMPLE_SENTENCES: &[&str] = &[
    "Hi, my name is Ahmad bin Abdullah and you can reach me at 012-3456789 or email me at ahmad.abdullah@gmail.com",
    "Please contact Siti Nurhaliza at +60123456789 or siti.nurhaliza@yahoo.com.my for more information",
    "Lim Wei Ming from Kuala Lumpur can be reached at 03-12345678 or lim.weiming@company.my",
    "Dr. Rajesh s/o Krishnan is available at 019-8765432 and his email is rajesh.krishnan@hospital.my",
    "For urgent matters, call Tan Ah Kow at +603-87654321 or send an email to tan.ahkow@business.com.my",
    "Priya d/o Raman works at the office, her contact is 017-2345678 and email priya.raman@office.org",
    "Muhammad Al-Fatih can be contacted via phone 016-9876543 or email muhammad.alfatih@university.edu.my",
    "Lee Chong Wei's assistant can be reached at 04-1234567 or assistant@leechongwei.com",
    "Contact our customer service team at 1300-88-1234 or support@company.com.my for assistance",
    "The meeting with Wong Kar Wai is scheduled for tomorrow, please call 082-765432 or email wong.karwai@film.my",
];

/// Appends labelled cases while keeping one id counter across all classes
struct DatasetBuilder {
    cases: Vec<LabeledCase>,
    next_id: usize,
}

impl DatasetBuilder {
    fn new() -> Self {
        Self {
            cases: Vec::new(),
            next_id: 1,
        }
    }

    fn push_all(&mut self, class: DataClass, values: &[&str], expected_match: bool, category: &str) {
        for value in values {
            self.cases.push(LabeledCase {
                id: format!("{}-{}", class.as_str(), self.next_id),
                value: value.to_string(),
                class,
                expected_match,
                category: category.to_string(),
            });
            self.next_id += 1;
        }
    }
}

/// Generate the full labelled dataset: names, then phones, then emails
pub fn generate_test_dataset() -> Vec<LabeledCase> {
    let mut builder = DatasetBuilder::new();

    builder.push_all(DataClass::Name, POSITIVE_NAMES, true, "Valid Malaysian Name");
    builder.push_all(DataClass::Name, NEGATIVE_NAMES, false, "Invalid Name Format");
    builder.push_all(DataClass::Phone, POSITIVE_PHONES, true, "Valid Malaysian Phone");
    builder.push_all(DataClass::Phone, NEGATIVE_PHONES, false, "Invalid Phone Format");
    builder.push_all(DataClass::Email, POSITIVE_EMAILS, true, "Valid Email");
    builder.push_all(DataClass::Email, NEGATIVE_EMAILS, false, "Invalid Email Format");

    builder.cases
}

/// Cases of a single class, preserving dataset order
pub fn cases_for(cases: &[LabeledCase], class: DataClass) -> Vec<&LabeledCase> {
    cases.iter().filter(|c| c.class == class).collect()
}
