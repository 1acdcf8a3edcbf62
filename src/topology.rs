use fxhash::FxHashMap;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::iproduct;
use petgraph::{
    algo::all_simple_paths,
    graph::{Graph, NodeIndex},
};

use crate::{
    config::Config,
    utils,
    vne_core::parameters::{HOP_SLUG, PB_CHARS, PB_TEMPLATES, SHORTEST_K},
    LinkId, NodeId,
};

#[derive(Debug, Clone)]
pub struct RouteCandidate {
    pub node_route: Vec<usize>,
    pub link_route: Vec<LinkId>,
}

impl RouteCandidate {
    pub fn new(node_route: Vec<usize>, link_route: Vec<LinkId>) -> RouteCandidate {
        RouteCandidate {
            node_route,
            link_route,
        }
    }
}

#[derive(Debug)]
pub struct Topology {
    /// トポロジの名前
    pub name: String,
    /// 隣接行列
    pub link_matrix: Vec<Vec<bool>>,
    /// エッジ
    pub edges: Vec<LinkId>,
    /// ルート情報
    pub route_candidates: FxHashMap<(NodeId, NodeId), Vec<RouteCandidate>>,
}

impl Topology {
    pub fn new(config: &Config) -> Topology {
        let name = config.network.topology.clone();
        let link_matrix = get_link_matrix(&name);

        Self::from_link_matrix(&name, link_matrix)
    }

    pub fn from_link_matrix(name: &str, link_matrix: Vec<Vec<bool>>) -> Topology {
        let edges = link_matrix_to_edges(&link_matrix);
        let route_candidates = get_route_candidates_from_matrix(&link_matrix);

        Topology {
            name: name.to_string(),
            link_matrix,
            edges,
            route_candidates,
        }
    }

    pub fn node_count(&self) -> usize {
        self.link_matrix.len()
    }

    /// src->dstのルート候補を短い順に返す
    pub fn get_route_candidates(&self, src: NodeId, dst: NodeId) -> &[RouteCandidate] {
        match self.route_candidates.get(&(src, dst)) {
            Some(candidates) => candidates,
            None => &[],
        }
    }
}

fn get_link_matrix(name: &str) -> Vec<Vec<bool>> {
    let filename = format!("./files/topology/{}.csv", name);

    match utils::read_file(&filename) {
        Ok(contents) => utils::string_to_vec2_bool(&contents),
        Err(_) => panic!("トポロジファイルを開けませんでした: {filename}"),
    }
}

fn link_matrix_to_edges(link_matrix: &[Vec<bool>]) -> Vec<LinkId> {
    let mut edges = vec![];

    for (i, row) in link_matrix.iter().enumerate() {
        for (j, &connected) in row.iter().enumerate() {
            if connected && i < j {
                edges.push(LinkId::between(i, j));
            }
        }
    }

    edges
}

fn get_route_candidates_from_matrix(
    link_matrix: &[Vec<bool>],
) -> FxHashMap<(NodeId, NodeId), Vec<RouteCandidate>> {
    // グラフの作成
    let mut g = Graph::<usize, usize>::new();

    for _ in 0..link_matrix.len() {
        g.add_node(1);
    }

    for edge in link_matrix_to_edges(link_matrix) {
        let src: usize = edge.src.into();
        let dst: usize = edge.dst.into();
        g.add_edge(NodeIndex::new(src), NodeIndex::new(dst), 1);
        g.add_edge(NodeIndex::new(dst), NodeIndex::new(src), 1);
    }

    get_route_cands_from_graph(g)
}

pub fn get_route_cands_from_graph(
    g: Graph<usize, usize>,
) -> FxHashMap<(NodeId, NodeId), Vec<RouteCandidate>> {
    let sd_pairs: Vec<(NodeIndex, NodeIndex)> = iproduct!(g.node_indices(), g.node_indices())
        .filter(|(s, d)| s.index() != d.index())
        .collect();

    let pb = ProgressBar::new(sd_pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PB_TEMPLATES)
            .unwrap()
            .progress_chars(PB_CHARS),
    );

    let mut route_candidates = FxHashMap::default();

    for (src, dst) in sd_pairs {
        let mut route_all: Vec<Vec<NodeIndex>> = vec![];
        let mut route_length = 0;

        let mut shortest_route_len = None;

        while shortest_route_len.is_none()
            || route_length <= shortest_route_len.unwrap() + HOP_SLUG
        {
            if g.node_count() < route_length {
                break;
            }

            let routes = all_simple_paths::<Vec<_>, _>(&g, src, dst, route_length, Some(route_length))
                .collect::<Vec<_>>();

            if shortest_route_len.is_none() && !routes.is_empty() {
                shortest_route_len = Some(route_length);
            }

            route_all.extend(routes);
            route_length += 1;
        }

        let candidates = if route_all.is_empty() {
            vec![]
        } else {
            // shortest_k 打ち切り
            route_all.truncate(SHORTEST_K);

            route_all
                .into_iter()
                .map(|route| {
                    let node_route: Vec<usize> = route.iter().map(|n| n.index()).collect();
                    let link_route = node_route
                        .windows(2)
                        .map(|w| LinkId::between(w[0], w[1]))
                        .collect();

                    RouteCandidate::new(node_route, link_route)
                })
                .collect()
        };

        route_candidates.insert(
            (NodeId::new(src.index()), NodeId::new(dst.index())),
            candidates,
        );
        pb.inc(1);
    }

    pb.finish_and_clear();

    route_candidates
}
