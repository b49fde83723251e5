//! Educational text for each recognized lab parameter.
//!
//! Immutable, compiled in. The composer picks the meaning/advice branch
//! matching the classified status; the text never diagnoses, it explains
//! what a test measures and what an out-of-range value commonly implies.

/// Explanation text for one parameter.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationEntry {
    pub name: &'static str,
    /// What the test measures.
    pub what_it_is: &'static str,
    pub low_meaning: &'static str,
    pub high_meaning: &'static str,
    pub low_advice: &'static str,
    pub high_advice: &'static str,
}

/// Meaning text attached to values inside the reference range.
pub const NORMAL_MEANING: &str = "This value is within the normal range.";

/// Advice text attached to values inside the reference range.
pub const NORMAL_ADVICE: &str = "Keep maintaining your current lifestyle.";

pub const EXPLANATIONS: [ExplanationEntry; 15] = [
    ExplanationEntry {
        name: "Hemoglobin",
        what_it_is: "the protein in red blood cells that carries oxygen throughout the body",
        low_meaning: "Low hemoglobin means the blood cannot carry enough oxygen, which can cause fatigue, weakness, shortness of breath, and dizziness.",
        high_meaning: "High hemoglobin can thicken the blood and increase the risk of clots.",
        low_advice: "Eat iron-rich foods (spinach, red meat, beans), increase vitamin C intake, and consult your doctor.",
        high_advice: "Stay hydrated, reduce iron intake, and consult your doctor.",
    },
    ExplanationEntry {
        name: "RBC Count",
        what_it_is: "the number of red blood cells that carry oxygen",
        low_meaning: "A low RBC count (anemia) causes fatigue, weakness, pale skin, and reduced oxygen delivery to organs.",
        high_meaning: "A high RBC count can increase blood viscosity, raising the risk of blood clots and stroke.",
        low_advice: "Increase iron intake, eat vitamin B12 rich foods, rest more, and see your doctor.",
        high_advice: "Stay well-hydrated, avoid dehydration, and consult your doctor.",
    },
    ExplanationEntry {
        name: "WBC Count",
        what_it_is: "the number of white blood cells that fight infection",
        low_meaning: "A low WBC count weakens the immune system, making infections more likely.",
        high_meaning: "A high WBC count suggests the body may be fighting an infection or inflammation, or a more serious condition.",
        low_advice: "Avoid crowds and sick contacts, maintain hygiene, rest well, and see your doctor.",
        high_advice: "Rest, stay hydrated, monitor for signs of infection, and consult your doctor.",
    },
    ExplanationEntry {
        name: "Platelet Count",
        what_it_is: "the number of platelets that help blood clot and stop bleeding",
        low_meaning: "Low platelets increase the risk of heavy bleeding, bruising, and bleeding gums.",
        high_meaning: "High platelets can increase the risk of blood clots, stroke, or heart attack.",
        low_advice: "Avoid injuries and strenuous activity, avoid blood thinners, and see your doctor.",
        high_advice: "Stay hydrated, watch for clotting symptoms, and consult your doctor.",
    },
    ExplanationEntry {
        name: "Hematocrit",
        what_it_is: "the percentage of red blood cells in total blood volume",
        low_meaning: "Low hematocrit (anemia) means less oxygen delivery, causing fatigue and weakness.",
        high_meaning: "High hematocrit thickens the blood, raising stroke and clot risk.",
        low_advice: "Increase iron, B12, and folate intake, get adequate rest, and see your doctor.",
        high_advice: "Increase water intake, avoid dehydration, limit iron, and consult your doctor.",
    },
    ExplanationEntry {
        name: "Total Bilirubin",
        what_it_is: "a yellow pigment from the breakdown of old red blood cells, processed by the liver",
        low_meaning: "Low bilirubin is rarely a concern.",
        high_meaning: "High bilirubin points to liver problems and jaundice (yellowing of skin or eyes).",
        low_advice: "No specific action needed; monitor.",
        high_advice: "Avoid alcohol, reduce fatty foods, eat liver-healthy foods, and see your doctor promptly.",
    },
    ExplanationEntry {
        name: "ALT (SGPT)",
        what_it_is: "a liver enzyme that reflects liver function and cell damage",
        low_meaning: "Low ALT is generally normal.",
        high_meaning: "High ALT indicates liver inflammation or damage (hepatitis, fatty liver, cirrhosis).",
        low_advice: "No action needed.",
        high_advice: "Avoid alcohol completely, cut fatty and fried foods, review medications, and see a liver specialist.",
    },
    ExplanationEntry {
        name: "AST (SGOT)",
        what_it_is: "an enzyme found in liver, heart, and muscle that signals tissue damage",
        low_meaning: "Low AST is normal.",
        high_meaning: "High AST indicates liver damage, heart disease, or muscle injury.",
        low_advice: "No action needed.",
        high_advice: "Avoid alcohol, eat healthy foods, manage stress, and consult your doctor.",
    },
    ExplanationEntry {
        name: "Alkaline Phosphatase",
        what_it_is: "an enzyme in bone and liver reflecting bone and liver health",
        low_meaning: "Low levels are rare but can indicate a nutrient deficiency.",
        high_meaning: "High levels can indicate bone disease, liver disease, or healing fractures.",
        low_advice: "Ensure adequate nutrition; see your doctor if it persists.",
        high_advice: "Get enough calcium and vitamin D, avoid bone-damaging activities, and see your doctor.",
    },
    ExplanationEntry {
        name: "Total Cholesterol",
        what_it_is: "the total amount of cholesterol in the blood; high levels raise heart disease risk",
        low_meaning: "Low cholesterol is rarely harmful unless extremely low.",
        high_meaning: "High cholesterol leads to artery blockage, heart attack, and stroke.",
        low_advice: "Monitor; no major action usually needed.",
        high_advice: "Exercise 30+ minutes daily, reduce saturated fats, eat soluble fiber, stop smoking, and see your doctor.",
    },
    ExplanationEntry {
        name: "LDL Cholesterol",
        what_it_is: "the \"bad\" cholesterol that builds up in artery walls and causes blockages",
        low_meaning: "Low LDL is protective for heart health.",
        high_meaning: "High LDL greatly increases the risk of heart attack and stroke from arterial blockage.",
        low_advice: "Good; maintain your current lifestyle.",
        high_advice: "Reduce red meat and dairy, switch to heart-healthy fats (olive oil, fish), exercise daily, discuss medication, and see your doctor.",
    },
    ExplanationEntry {
        name: "HDL Cholesterol",
        what_it_is: "the \"good\" cholesterol that removes bad cholesterol and protects the heart",
        low_meaning: "Low HDL increases heart disease and stroke risk.",
        high_meaning: "High HDL protects the heart and reduces disease risk.",
        low_advice: "Increase aerobic exercise, eat omega-3 rich fish, cut refined carbs, stop smoking, and see your doctor.",
        high_advice: "Excellent; maintain your current healthy lifestyle.",
    },
    ExplanationEntry {
        name: "Triglycerides",
        what_it_is: "a type of fat in the blood; high levels raise heart disease risk",
        low_meaning: "Low triglycerides are healthy.",
        high_meaning: "High triglycerides increase the risk of heart disease, stroke, and pancreatitis.",
        low_advice: "Good; maintain your current lifestyle.",
        high_advice: "Cut sugar and refined carbs, lose weight, increase aerobic exercise, reduce alcohol, and see your doctor.",
    },
    ExplanationEntry {
        name: "Fasting Blood Sugar",
        what_it_is: "the blood sugar level after 8+ hours of fasting, a diabetes risk indicator",
        low_meaning: "Very low blood sugar can cause hypoglycemia with dizziness, shakiness, and confusion.",
        high_meaning: "High fasting sugar signals pre-diabetes or diabetes, raising the risk of heart and kidney damage.",
        low_advice: "Eat regular meals with carbs and protein, and watch for hypoglycemia symptoms.",
        high_advice: "Reduce sugar and refined carbs, eat fiber-rich foods, exercise, lose weight, and see your doctor.",
    },
    ExplanationEntry {
        name: "HbA1c",
        what_it_is: "the average blood sugar over roughly three months, reflecting long-term control",
        low_meaning: "Low HbA1c is healthy.",
        high_meaning: "High HbA1c indicates pre-diabetes or diabetes, with risk of kidney disease, nerve damage, and vision loss.",
        low_advice: "Good; maintain your current lifestyle.",
        high_advice: "Lifestyle changes now can prevent diabetes: reduce sugar and carbs, exercise 30+ minutes daily, lose weight if needed, and see your doctor.",
    },
];

/// Look up explanation text by parameter name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static ExplanationEntry> {
    EXPLANATIONS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_parameters() {
        assert!(lookup("HbA1c").is_some());
        assert!(lookup("hba1c").is_some());
        assert!(lookup("Ferritin").is_none());
    }

    #[test]
    fn no_entry_has_empty_text() {
        for entry in &EXPLANATIONS {
            assert!(!entry.what_it_is.is_empty(), "{}", entry.name);
            assert!(!entry.low_meaning.is_empty(), "{}", entry.name);
            assert!(!entry.high_meaning.is_empty(), "{}", entry.name);
            assert!(!entry.low_advice.is_empty(), "{}", entry.name);
            assert!(!entry.high_advice.is_empty(), "{}", entry.name);
        }
    }
}
