use crate::engagement::SurveyResponse;
use std::io::Read;

/// Reads survey rows; columns other than `employee_id` and `score` are ignored.
pub(crate) fn parse_responses<R: Read>(reader: R) -> Result<Vec<SurveyResponse>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<SurveyResponse>()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn trims_fields_and_ignores_extra_columns() {
        let csv = "employee_id, team ,score\n 1 , platform , 4.5 \n2,sales,2\n";

        let responses = parse_responses(Cursor::new(csv)).expect("parse");

        assert_eq!(
            responses,
            vec![
                SurveyResponse {
                    employee_id: 1,
                    score: 4.5
                },
                SurveyResponse {
                    employee_id: 2,
                    score: 2.0
                },
            ]
        );
    }

    #[test]
    fn rejects_non_numeric_scores() {
        let csv = "employee_id,score\n1,great\n";

        assert!(parse_responses(Cursor::new(csv)).is_err());
    }

    #[test]
    fn header_only_yields_no_rows() {
        let responses = parse_responses(Cursor::new("employee_id,score\n")).expect("parse");

        assert!(responses.is_empty());
    }
}
