use litscope_scopus::ScopusCsvLoader;

const HEADER: &str = "Authors,Author(s) ID,Title,Year,Source title,Cited by,DOI,Abstract,Authors with affiliations,Author Keywords,Publisher,Language of Original Document,Document Type,PubMed ID,EID\n";

/// Synthetic export with `rows` records of five authors each
fn synthetic_export(rows: usize) -> String {
    let mut csv = String::from(HEADER);
    for i in 0..rows {
        let authors: Vec<String> = (0..5)
            .map(|a| format!("Author{a}, X., Dept. {a}, University {i}, City, Country"))
            .collect();
        let ids: String = (0..5).map(|a| format!("{}{a};", 5700000 + i)).collect();
        csv.push_str(&format!(
            "\"A. X.\",{ids},Title {i},{year},Journal {j},{i},10.1000/{i},\"Abstract, number {i}.\",\"{authors}\",kw1; kw2; kw3,Publisher,English,Article,{i},2-s2.0-{i}\n",
            year = 1990 + i % 35,
            j = i % 50,
            authors = authors.join("; "),
        ));
    }
    csv
}

#[divan::bench(args = [1_000, 10_000])]
fn load_scopus_rows(bencher: divan::Bencher, rows: usize) {
    let csv = synthetic_export(rows);
    let loader = ScopusCsvLoader::new();
    bencher.bench(|| loader.load_reader(csv.as_bytes()).unwrap());
}

fn main() {
    divan::main();
}
