use hyper::{Method, StatusCode};

/// An API endpoint with its path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Route {
    /// `POST /api/cars/add`
    AddCars,

    /// `GET /api/car/{carId}`
    GetCar(String),

    /// `GET /api/cars`
    ListCars,

    /// `PATCH /api/car/{carId}/edit`
    EditCar(String),

    /// `DELETE /api/car/{carId}/delete`
    DeleteCar(String),
}

impl Route {
    /// Matches a request line. An unknown path is `404`; a known path with
    /// the wrong method is `405`.
    pub(super) fn resolve(method: &Method, path: &str) -> Result<Route, StatusCode> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let (route, expected) = match segments[..] {
            ["api", "cars", "add"] => (Route::AddCars, Method::POST),
            ["api", "cars"] => (Route::ListCars, Method::GET),
            ["api", "car", id] => (Route::GetCar(id.to_string()), Method::GET),
            ["api", "car", id, "edit"] => (Route::EditCar(id.to_string()), Method::PATCH),
            ["api", "car", id, "delete"] => (Route::DeleteCar(id.to_string()), Method::DELETE),
            _ => return Err(StatusCode::NOT_FOUND),
        };

        if *method != expected {
            return Err(StatusCode::METHOD_NOT_ALLOWED);
        }

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_endpoint() {
        let cases = [
            (Method::POST, "/api/cars/add", Route::AddCars),
            (Method::GET, "/api/cars", Route::ListCars),
            (Method::GET, "/api/car/7", Route::GetCar("7".into())),
            (Method::PATCH, "/api/car/7/edit", Route::EditCar("7".into())),
            (Method::DELETE, "/api/car/7/delete", Route::DeleteCar("7".into())),
        ];

        for (method, path, expected) in cases {
            assert_eq!(Route::resolve(&method, path), Ok(expected), "{method} {path}");
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::resolve(&Method::GET, "/api/cars/"), Ok(Route::ListCars));
    }

    #[test]
    fn wrong_method() {
        assert_eq!(
            Route::resolve(&Method::GET, "/api/car/7/delete"),
            Err(StatusCode::METHOD_NOT_ALLOWED)
        );
    }

    #[test]
    fn unknown_path() {
        assert_eq!(
            Route::resolve(&Method::GET, "/api/trucks"),
            Err(StatusCode::NOT_FOUND)
        );
    }
}
