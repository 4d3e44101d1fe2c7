//! Drive the chart the way an embedding page would: load a demo patient,
//! click a tooth, let the animation settle, and print what a renderer
//! would draw.

use dentarch_chart::{ChartController, ChartOptions, ChartSource, DiagnosisSource, SourceError};
use dentarch_ir::{
    AiFinding, ChartRecord, Diagnosis, RestorationRecord, RestorationType, Severity, Surface,
    ToothNumber, ToothStatus,
};

struct DemoChart;

impl ChartSource for DemoChart {
    async fn fetch_chart(&self, _patient_id: &str) -> Result<Vec<ChartRecord>, SourceError> {
        Ok(vec![
            ChartRecord {
                tooth_number: "8".to_string(),
                status: ToothStatus::Extracted,
                current_restoration: None,
            },
            ChartRecord {
                tooth_number: "19".to_string(),
                status: ToothStatus::Present,
                current_restoration: Some(RestorationRecord {
                    restoration_type: RestorationType::Amalgam,
                    surfaces: vec![Surface::Mesial, Surface::Occlusal],
                }),
            },
            ChartRecord {
                tooth_number: "30".to_string(),
                status: ToothStatus::Present,
                current_restoration: Some(RestorationRecord {
                    restoration_type: RestorationType::CrownZirconia,
                    surfaces: vec![],
                }),
            },
        ])
    }
}

struct DemoDiagnosis;

impl DiagnosisSource for DemoDiagnosis {
    async fn fetch_diagnosis(&self, _patient_id: &str) -> Result<Diagnosis, SourceError> {
        Ok(Diagnosis {
            findings: vec![AiFinding {
                tooth: ToothNumber::new(30).expect("valid tooth"),
                finding_type: "recurrent_caries".to_string(),
                severity: Severity::High,
                confidence: 0.87,
                description: "Radiolucency at the crown margin".to_string(),
                treatment_suggestions: vec!["Replace crown".to_string()],
            }],
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut chart = ChartController::new(DemoChart, DemoDiagnosis, ChartOptions::default());
    chart.set_on_tooth_select(|n| println!("selected tooth {n}"));

    chart.load_patient("demo-patient").await.expect("load");

    let tooth_30 = ToothNumber::new(30).expect("valid tooth");
    chart.click(tooth_30);

    // Let the selection scale settle the way the frame loop would.
    for _ in 0..120 {
        chart.step(1.0 / 60.0);
    }

    let list = chart.render_list().expect("scene ready");
    println!(
        "{} drawables, {} labels, {} badges",
        list.drawables.len(),
        list.labels.len(),
        list.badges.len()
    );

    if let Some(detail) = chart.active_tooth_detail() {
        println!(
            "active tooth {}: {:?}, {} finding(s)",
            detail.number,
            detail.status,
            detail.findings.len()
        );
    }
}
