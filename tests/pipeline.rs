use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use movie_popularity::config::{AppConfig, ChartSettings, DataSettings};
use movie_popularity::errors::{DataError, DataSource};
use movie_popularity::popularity::Selection;
use movie_popularity::prompt::RecommendationRequest;
use movie_popularity::services::RecommendationService;

const MOVIES: &str = "movieId,title,genres
1,Toy Story (1995),Adventure|Animation|Children|Comedy|Fantasy
2,Jumanji (1995),Adventure|Children|Fantasy
3,Grumpier Old Men (1995),Comedy|Romance
5,Father of the Bride Part II (1995),Comedy
6,Heat (1995),Action|Crime|Thriller
";

const RATINGS: &str = "userId,movieId,rating,timestamp
1,1,4.0,964982703
2,1,5.0,964982224
3,1,4.0,964983815
1,2,3.5,964981247
2,2,3.0,964982931
1,3,4.0,964982400
1,5,5.0,964980868
4,6,2.0,964982176
5,6,3.0,964984041
6,6,4.0,964982653
7,6,3.0,964982211
1,99,5.0,964982653
";

fn write_inputs(dir: &Path) -> DataSettings {
    let movies_path = dir.join("movies.csv");
    let ratings_path = dir.join("ratings.csv");
    fs::write(&movies_path, MOVIES).unwrap();
    fs::write(&ratings_path, RATINGS).unwrap();
    DataSettings {
        movies_path,
        ratings_path,
    }
}

fn config(data: DataSettings, chart_dir: &Path) -> AppConfig {
    AppConfig {
        data,
        chart: ChartSettings {
            output_dir: chart_dir.to_path_buf(),
            top_n: 20,
            bar_width: 30,
        },
    }
}

fn titles(selection: &Selection) -> Vec<String> {
    selection
        .entries()
        .unwrap()
        .iter()
        .map(|e| e.title.clone())
        .collect()
}

#[test]
fn test_ranking_from_csv_files() {
    let dir = tempfile::tempdir().unwrap();
    let service = RecommendationService::load(config(write_inputs(dir.path()), dir.path())).unwrap();

    // movie 99 has ratings but no metadata
    assert_eq!(service.popularity().len(), 5);
    assert!(service.popularity().iter().all(|e| e.movie_id != 99));

    let top = service.recommend(&RecommendationRequest::Popularity {
        count: NonZeroUsize::new(2).unwrap(),
    });
    assert_eq!(titles(&top), vec!["Toy Story (1995)", "Heat (1995)"]);

    let comedy = service.recommend(&RecommendationRequest::Genre {
        genre: "comedy".to_string(),
        count: NonZeroUsize::new(10).unwrap(),
    });
    assert_eq!(
        titles(&comedy),
        vec![
            "Toy Story (1995)",
            "Father of the Bride Part II (1995)",
            "Grumpier Old Men (1995)"
        ]
    );

    let scifi = service.recommend(&RecommendationRequest::Genre {
        genre: "Sci-Fi".to_string(),
        count: NonZeroUsize::new(5).unwrap(),
    });
    assert!(scifi.is_no_match());
}

#[test]
fn test_missing_ratings_file_is_data_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let mut data = write_inputs(dir.path());
    data.ratings_path = dir.path().join("absent.csv");

    let err = RecommendationService::load(config(data, dir.path()))
        .err()
        .expect("loading should fail");

    let data_error = err.downcast_ref::<DataError>().unwrap();
    assert_eq!(data_error.kind(), DataSource::Ratings);
}

#[test]
fn test_visualize_saves_genre_chart() {
    let dir = tempfile::tempdir().unwrap();
    let service = RecommendationService::load(config(write_inputs(dir.path()), dir.path())).unwrap();
    let mut out = Vec::new();

    let path = service.visualize(3, Some("Comedy"), &mut out).unwrap().unwrap();

    assert_eq!(path, dir.path().join("top_popular_comedy_movies.svg"));
    let svg = fs::read_to_string(path).unwrap();
    assert!(svg.contains("Top 3 Popular Comedy Movies"));
    assert!(String::from_utf8(out).unwrap().contains("Visualization saved as"));
}
