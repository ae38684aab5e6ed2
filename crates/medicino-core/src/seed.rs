//! Built-in reference data: condition records with symptom profiles and a
//! medicines catalog. Loaded into the database once at setup time via
//! [`crate::Medicino::seed`].

use crate::models::{Condition, Medicine, Severity};

fn condition(
    name: &str,
    symptoms: &str,
    remedy: &str,
    suggestion: &str,
    severity: Severity,
    description: &str,
    precautions: &str,
) -> Condition {
    Condition::new(
        name.into(),
        symptoms.into(),
        remedy.into(),
        suggestion.into(),
        severity,
        description.into(),
        precautions.into(),
    )
}

/// The default condition reference table, in table order. The matcher's
/// tie-break follows this ordering.
pub fn default_conditions() -> Vec<Condition> {
    vec![
        // Respiratory
        condition(
            "Common Cold",
            "runny nose, sneezing, sore throat, cough, congestion, mild fever, fatigue",
            "Tulsi tea, ginger tea, honey with warm water, steam inhalation with eucalyptus oil",
            "Paracetamol, Vitamin C supplements, Decongestants",
            Severity::Mild,
            "A viral infection affecting the upper respiratory tract",
            "Rest, stay hydrated, avoid cold foods, maintain good hygiene",
        ),
        condition(
            "Bronchitis",
            "persistent cough, chest discomfort, wheezing, shortness of breath, fatigue, mild fever",
            "Vasaka leaf decoction, Sitopaladi churna, Kantakari tea",
            "Bronchodilators, Expectorants, Antibiotics if bacterial",
            Severity::Moderate,
            "Inflammation of the bronchial tubes causing cough and breathing difficulties",
            "Avoid smoking, stay hydrated, use humidifier, rest",
        ),
        condition(
            "Pneumonia",
            "high fever, severe cough, chest pain, difficulty breathing, fatigue, loss of appetite",
            "Kanakasava, Vasavaleha, Sitopaladi churna",
            "Antibiotics, Oxygen therapy, Hospitalization if severe",
            Severity::Severe,
            "Serious lung infection requiring immediate medical attention",
            "Seek immediate medical care, complete antibiotic course, rest",
        ),
        // Digestive
        condition(
            "Gastritis",
            "stomach pain, nausea, vomiting, loss of appetite, bloating, heartburn",
            "Amla powder, Licorice root, Ginger tea, Aloe vera juice",
            "Antacids, Proton pump inhibitors, H2 blockers",
            Severity::Moderate,
            "Inflammation of the stomach lining causing digestive discomfort",
            "Avoid spicy foods, eat smaller meals, avoid alcohol and smoking",
        ),
        condition(
            "Food Poisoning",
            "nausea, vomiting, diarrhea, stomach cramps, fever, dehydration",
            "Ginger tea, Cumin water, Coriander seeds, ORS solution",
            "Oral rehydration solution, Anti-emetics, Anti-diarrheals",
            Severity::Moderate,
            "Illness caused by consuming contaminated food or water",
            "Stay hydrated, rest, avoid solid foods initially, seek medical care if severe",
        ),
        condition(
            "Irritable Bowel Syndrome",
            "abdominal pain, bloating, diarrhea, constipation, gas, mucus in stool",
            "Triphala churna, Isabgol, Hing, Jeera water",
            "Fiber supplements, Anti-spasmodics, Probiotics",
            Severity::Moderate,
            "Chronic digestive disorder affecting the large intestine",
            "Identify trigger foods, manage stress, regular exercise, fiber-rich diet",
        ),
        // Cardiovascular
        condition(
            "Hypertension",
            "headache, dizziness, chest pain, shortness of breath, vision problems, fatigue",
            "Arjuna bark powder, Sarpagandha, Jatamansi, Garlic",
            "ACE inhibitors, Beta blockers, Calcium channel blockers",
            Severity::Severe,
            "High blood pressure requiring medical management",
            "Regular monitoring, low-salt diet, exercise, stress management",
        ),
        condition(
            "Angina",
            "chest pain, pressure in chest, pain radiating to arms, shortness of breath, fatigue",
            "Arjuna bark, Guggulu, Pushkarmool, Garlic",
            "Nitroglycerin, Beta blockers, Calcium channel blockers",
            Severity::Severe,
            "Chest pain due to reduced blood flow to heart",
            "Immediate medical attention, avoid strenuous activity, quit smoking",
        ),
        // Neurological
        condition(
            "Migraine",
            "severe headache, nausea, vomiting, sensitivity to light, aura, dizziness",
            "Brahmi, Shankhpushpi, Jatamansi, Ginger tea",
            "Triptans, NSAIDs, Anti-emetics, Preventive medications",
            Severity::Moderate,
            "Recurrent severe headaches often with visual disturbances",
            "Identify triggers, maintain regular sleep, avoid stress, stay hydrated",
        ),
        condition(
            "Tension Headache",
            "mild to moderate headache, pressure around head, neck pain, stress",
            "Brahmi, Shankhpushpi, Lavender oil, Peppermint oil",
            "Paracetamol, Ibuprofen, Muscle relaxants",
            Severity::Mild,
            "Common headache caused by stress and muscle tension",
            "Stress management, regular breaks, good posture, relaxation techniques",
        ),
        // Musculoskeletal
        condition(
            "Arthritis",
            "joint pain, stiffness, swelling, reduced range of motion, fatigue",
            "Guggulu, Shallaki, Ashwagandha, Turmeric with milk",
            "NSAIDs, DMARDs, Physical therapy, Joint supplements",
            Severity::Moderate,
            "Inflammation of joints causing pain and stiffness",
            "Regular exercise, weight management, joint protection, balanced diet",
        ),
        condition(
            "Back Pain",
            "lower back pain, stiffness, muscle spasms, radiating pain, difficulty moving",
            "Ashwagandha, Guggulu, Shallaki, Sesame oil massage",
            "NSAIDs, Muscle relaxants, Physical therapy, Heat/cold therapy",
            Severity::Moderate,
            "Common condition affecting the lower back muscles and spine",
            "Good posture, regular exercise, proper lifting techniques, ergonomic setup",
        ),
        // Skin
        condition(
            "Eczema",
            "itchy skin, red patches, dry skin, inflammation, scaling, oozing",
            "Neem paste, Turmeric paste, Coconut oil, Aloe vera gel",
            "Topical corticosteroids, Moisturizers, Antihistamines",
            Severity::Moderate,
            "Chronic skin condition causing inflammation and itching",
            "Avoid triggers, moisturize regularly, gentle skin care, stress management",
        ),
        condition(
            "Acne",
            "pimples, blackheads, whiteheads, inflammation, scarring, oily skin",
            "Neem paste, Turmeric paste, Aloe vera, Sandalwood paste",
            "Benzoyl peroxide, Salicylic acid, Retinoids, Antibiotics",
            Severity::Mild,
            "Common skin condition affecting hair follicles and oil glands",
            "Gentle cleansing, avoid touching face, healthy diet, stress management",
        ),
        // Endocrine
        condition(
            "Diabetes",
            "increased thirst, frequent urination, fatigue, blurred vision, slow healing",
            "Gudmar, Jamun seeds, Bitter gourd, Fenugreek seeds",
            "Metformin, Insulin, Sulfonylureas, DPP-4 inhibitors",
            Severity::Severe,
            "Chronic condition affecting blood sugar regulation",
            "Regular monitoring, balanced diet, exercise, medication compliance",
        ),
        condition(
            "Thyroid Disorder",
            "fatigue, weight changes, mood swings, hair loss, temperature sensitivity",
            "Ashwagandha, Kanchanara, Guggulu, Brahmi",
            "Levothyroxine, Anti-thyroid medications, Regular monitoring",
            Severity::Moderate,
            "Disorder affecting thyroid hormone production",
            "Regular check-ups, medication compliance, balanced diet, stress management",
        ),
        // Mental health
        condition(
            "Anxiety",
            "excessive worry, restlessness, difficulty concentrating, sleep problems, panic attacks",
            "Brahmi, Jatamansi, Shankhpushpi, Ashwagandha",
            "SSRIs, Benzodiazepines, Cognitive behavioral therapy",
            Severity::Moderate,
            "Mental health condition characterized by excessive worry and fear",
            "Stress management, regular exercise, therapy, medication compliance",
        ),
        condition(
            "Depression",
            "persistent sadness, loss of interest, fatigue, sleep changes, appetite changes",
            "Ashwagandha, Brahmi, Jatamansi, Saffron",
            "SSRIs, SNRIs, Psychotherapy, Lifestyle changes",
            Severity::Severe,
            "Serious mental health condition requiring professional treatment",
            "Seek professional help, maintain routine, social support, medication compliance",
        ),
        // Eyes
        condition(
            "Conjunctivitis",
            "red eyes, itching, discharge, swelling, sensitivity to light, blurred vision",
            "Rose water, Honey drops, Triphala eyewash, Coriander water",
            "Antibiotic eye drops, Antihistamines, Artificial tears",
            Severity::Mild,
            "Inflammation of the conjunctiva causing eye irritation",
            "Good hygiene, avoid touching eyes, separate towels, seek medical care",
        ),
        // Ears
        condition(
            "Ear Infection",
            "ear pain, hearing loss, fever, drainage, dizziness, pressure in ear",
            "Garlic oil, Onion juice, Warm compress, Tulsi drops",
            "Antibiotics, Pain relievers, Ear drops, Decongestants",
            Severity::Moderate,
            "Infection of the middle ear requiring medical treatment",
            "Seek medical care, avoid water in ears, complete antibiotic course",
        ),
        // Urinary
        condition(
            "Urinary Tract Infection",
            "frequent urination, burning sensation, cloudy urine, pelvic pain, fever",
            "Cranberry juice, Coriander seeds, Barley water, Coconut water",
            "Antibiotics, Increased fluid intake, Pain relievers",
            Severity::Moderate,
            "Infection of the urinary system requiring antibiotic treatment",
            "Stay hydrated, good hygiene, complete antibiotic course, seek medical care",
        ),
    ]
}

fn medicine(
    name: &str,
    description: &str,
    dosage: &str,
    side_effects: &str,
    contraindications: &str,
    price: f64,
    category: &str,
) -> Medicine {
    Medicine {
        name: name.into(),
        description: description.into(),
        dosage: dosage.into(),
        side_effects: side_effects.into(),
        contraindications: contraindications.into(),
        price,
        category: category.into(),
    }
}

/// The default medicines catalog.
pub fn default_medicines() -> Vec<Medicine> {
    vec![
        // Pain relief
        medicine(
            "Paracetamol",
            "Over-the-counter pain reliever and fever reducer",
            "500-1000mg every 4-6 hours, max 4000mg/day",
            "Nausea, stomach upset, liver damage in high doses",
            "Liver disease, alcohol dependence, pregnancy (consult doctor)",
            5.99,
            "Pain Relief",
        ),
        medicine(
            "Ibuprofen",
            "Non-steroidal anti-inflammatory drug for pain and inflammation",
            "200-400mg every 4-6 hours, max 1200mg/day",
            "Stomach upset, heartburn, increased bleeding risk",
            "Stomach ulcers, heart disease, kidney problems",
            7.99,
            "Pain Relief",
        ),
        medicine(
            "Aspirin",
            "Pain reliever and blood thinner",
            "325-650mg every 4-6 hours",
            "Stomach irritation, bleeding risk, ringing in ears",
            "Bleeding disorders, stomach ulcers, children under 12",
            4.99,
            "Pain Relief",
        ),
        medicine(
            "Diclofenac",
            "NSAID for pain, inflammation, and arthritis",
            "50mg 2-3 times daily",
            "Stomach pain, heartburn, nausea",
            "Ulcers, heart disease, kidney problems",
            10.60,
            "Pain Relief",
        ),
        // Respiratory
        medicine(
            "Salbutamol",
            "Bronchodilator for asthma and breathing difficulties",
            "2 puffs every 4-6 hours as needed",
            "Tremors, increased heart rate, nervousness",
            "Severe heart disease, uncontrolled arrhythmias",
            15.99,
            "Respiratory",
        ),
        medicine(
            "Montelukast",
            "Leukotriene receptor antagonist for asthma and allergies",
            "10mg once daily in the evening",
            "Headache, abdominal pain, behavioral changes",
            "Liver impairment, mental health disorders",
            17.80,
            "Respiratory",
        ),
        // Antibiotics
        medicine(
            "Amoxicillin",
            "Antibiotic for bacterial infections",
            "250-500mg three times daily for 7-10 days",
            "Diarrhea, nausea, allergic reactions",
            "Penicillin allergy, mononucleosis",
            12.99,
            "Antibiotics",
        ),
        medicine(
            "Azithromycin",
            "Macrolide antibiotic for respiratory and skin infections",
            "500mg on day 1, then 250mg for 4 days",
            "Diarrhea, nausea, abdominal pain",
            "Liver problems, QT prolongation",
            19.25,
            "Antibiotics",
        ),
        medicine(
            "Ciprofloxacin",
            "Fluoroquinolone antibiotic for various infections",
            "250-750mg every 12 hours",
            "Nausea, tendon rupture, rash",
            "Tendon disorders, myasthenia gravis",
            20.60,
            "Antibiotics",
        ),
        medicine(
            "Metronidazole",
            "Antibiotic for bacterial and parasitic infections",
            "500mg every 8 hours for 7-10 days",
            "Metallic taste, nausea, dizziness",
            "Alcohol use, liver disease, pregnancy (1st trimester)",
            11.00,
            "Antibiotics",
        ),
        // Digestive
        medicine(
            "Omeprazole",
            "Proton pump inhibitor for acid reflux and ulcers",
            "20-40mg once daily before breakfast",
            "Headache, diarrhea, vitamin B12 deficiency",
            "Liver disease, pregnancy, long-term use",
            18.99,
            "Digestive Health",
        ),
        medicine(
            "Ranitidine",
            "H2 blocker for ulcers and gastroesophageal reflux",
            "150mg twice daily",
            "Constipation, headache, dizziness",
            "Porphyria, hypersensitivity",
            8.25,
            "Digestive Health",
        ),
        // Cardiovascular
        medicine(
            "Amlodipine",
            "Calcium channel blocker for high blood pressure",
            "5-10mg once daily",
            "Swelling in ankles, dizziness, flushing",
            "Severe heart failure, aortic stenosis",
            22.99,
            "Cardiovascular",
        ),
        medicine(
            "Atorvastatin",
            "Statin medication to lower cholesterol",
            "10-80mg once daily",
            "Muscle pain, liver problems, diabetes risk",
            "Liver disease, pregnancy, active liver disease",
            28.99,
            "Cardiovascular",
        ),
        medicine(
            "Lisinopril",
            "ACE inhibitor used to treat high blood pressure and heart failure",
            "10-40mg once daily",
            "Dizziness, headache, persistent cough",
            "Pregnancy, angioedema, renal artery stenosis",
            14.50,
            "Cardiovascular",
        ),
        medicine(
            "Bisoprolol",
            "Beta-blocker for high blood pressure and heart failure",
            "5-10mg once daily",
            "Bradycardia, fatigue, cold extremities",
            "Asthma, heart block, severe bradycardia",
            15.70,
            "Cardiovascular",
        ),
        // Diabetes and hormones
        medicine(
            "Metformin",
            "Oral diabetes medication to control blood sugar",
            "500-2000mg daily in divided doses",
            "Nausea, diarrhea, lactic acidosis (rare)",
            "Severe kidney disease, heart failure",
            25.99,
            "Diabetes",
        ),
        medicine(
            "Levothyroxine",
            "Synthetic thyroid hormone for hypothyroidism",
            "25-100mcg daily",
            "Palpitations, weight loss, nervousness",
            "Thyrotoxicosis, uncorrected adrenal insufficiency",
            12.00,
            "Hormonal",
        ),
        // Mental health
        medicine(
            "Sertraline",
            "SSRI antidepressant for depression and anxiety",
            "50-200mg once daily",
            "Nausea, insomnia, sexual dysfunction",
            "MAOI use, bipolar disorder, pregnancy",
            35.99,
            "Mental Health",
        ),
        medicine(
            "Alprazolam",
            "Benzodiazepine for anxiety and panic disorders",
            "0.25-1mg three times daily",
            "Drowsiness, dependence, memory problems",
            "Respiratory depression, pregnancy, alcohol use",
            32.99,
            "Mental Health",
        ),
        // Dermatology
        medicine(
            "Hydrocortisone",
            "Topical corticosteroid for skin inflammation",
            "Apply 1-2 times daily to affected area",
            "Skin thinning, stretch marks, local irritation",
            "Fungal infections, open wounds, face use",
            8.99,
            "Dermatology",
        ),
        medicine(
            "Benzoyl Peroxide",
            "Topical medication for acne treatment",
            "Apply 1-2 times daily to affected areas",
            "Skin irritation, dryness, bleaching of clothes",
            "Sensitive skin, pregnancy, breastfeeding",
            9.99,
            "Dermatology",
        ),
        medicine(
            "Miconazole",
            "Topical antifungal for skin infections",
            "Apply 2 times daily for 2-4 weeks",
            "Skin irritation, burning, redness",
            "Allergy to imidazoles",
            9.50,
            "Dermatology",
        ),
        // Allergy
        medicine(
            "Cetirizine",
            "Antihistamine for allergy relief",
            "10mg once daily",
            "Drowsiness, dry mouth, headache",
            "Kidney disease, pregnancy, driving",
            10.99,
            "Allergy",
        ),
        medicine(
            "Loratadine",
            "Non-drowsy antihistamine for allergies",
            "10mg once daily",
            "Headache, dry mouth, fatigue",
            "Liver disease, pregnancy, children under 2",
            12.99,
            "Allergy",
        ),
        // Cough and cold
        medicine(
            "Dextromethorphan",
            "Cough suppressant for dry cough",
            "15-30mg every 4-6 hours",
            "Drowsiness, dizziness, nausea",
            "MAOI use, chronic cough, asthma",
            6.99,
            "Cough & Cold",
        ),
        medicine(
            "Guaifenesin",
            "Expectorant to loosen chest congestion",
            "200-400mg every 4 hours",
            "Nausea, vomiting, dizziness",
            "Severe kidney disease, pregnancy",
            7.99,
            "Cough & Cold",
        ),
        // Supplements
        medicine(
            "Vitamin D3",
            "Essential vitamin for bone health and immune function",
            "1000-4000 IU daily",
            "Nausea, kidney stones (high doses)",
            "Hypercalcemia, kidney disease",
            14.99,
            "Vitamins",
        ),
        medicine(
            "Folic Acid",
            "Essential B vitamin for pregnancy and cell growth",
            "400-800mcg daily",
            "Nausea, bitter taste, allergic reactions",
            "Vitamin B12 deficiency, cancer",
            8.99,
            "Vitamins",
        ),
        medicine(
            "Melatonin",
            "Natural sleep hormone for insomnia",
            "1-5mg 30 minutes before bedtime",
            "Drowsiness, vivid dreams, morning grogginess",
            "Pregnancy, autoimmune disorders",
            11.99,
            "Sleep",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_condition_names_unique() {
        let conditions = default_conditions();
        let names: HashSet<_> = conditions.iter().map(|c| c.condition_name.as_str()).collect();
        assert_eq!(names.len(), conditions.len());
    }

    #[test]
    fn test_conditions_have_symptoms() {
        for condition in default_conditions() {
            assert!(
                !condition.symptom_tokens().is_empty(),
                "{} has no symptoms",
                condition.condition_name
            );
        }
    }

    #[test]
    fn test_medicine_names_unique() {
        let medicines = default_medicines();
        let names: HashSet<_> = medicines.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names.len(), medicines.len());
    }

    #[test]
    fn test_medicines_have_positive_prices() {
        for medicine in default_medicines() {
            assert!(medicine.price > 0.0, "{} has no price", medicine.name);
        }
    }
}
